mod envelope;
pub use self::envelope::{Card, Content, Items};

mod kind;
pub use self::kind::ResourceKind;

mod attachment;
pub use self::attachment::Attachment;

mod forms;
pub use self::forms::{
    AnswerForm, CompanyForm, RelationshipAnswerForm, SourceForm, SOURCE_FILE_FIELD,
};
