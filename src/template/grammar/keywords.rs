//! Keyword recognizers for the `Action` and `Entity` rules
//!
//! The keyword tables are plain logos token enums. A recognizer lexes the run
//! of lowercase letters at the current position and reports how many
//! characters the first keyword covers. Logos picks the longest keyword, which
//! agrees with trying the alternatives in grammar order here because every
//! keyword that is a prefix of another (`route` / `routetable`) is listed
//! after it in the grammar.

use logos::Logos;

use super::buffer::Buffer;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKeyword {
    #[token("create")]
    Create,
    #[token("delete")]
    Delete,
    #[token("start")]
    Start,
    #[token("stop")]
    Stop,
    #[token("check")]
    Check,
    #[token("attach")]
    Attach,
    #[token("detach")]
    Detach,
    #[token("update")]
    Update,
}

impl ActionKeyword {
    pub const ALL: [ActionKeyword; 8] = [
        ActionKeyword::Create,
        ActionKeyword::Delete,
        ActionKeyword::Start,
        ActionKeyword::Stop,
        ActionKeyword::Check,
        ActionKeyword::Attach,
        ActionKeyword::Detach,
        ActionKeyword::Update,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKeyword::Create => "create",
            ActionKeyword::Delete => "delete",
            ActionKeyword::Start => "start",
            ActionKeyword::Stop => "stop",
            ActionKeyword::Check => "check",
            ActionKeyword::Attach => "attach",
            ActionKeyword::Detach => "detach",
            ActionKeyword::Update => "update",
        }
    }
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKeyword {
    #[token("vpc")]
    Vpc,
    #[token("subnet")]
    Subnet,
    #[token("instance")]
    Instance,
    #[token("role")]
    Role,
    #[token("securitygroup")]
    SecurityGroup,
    #[token("routetable")]
    RouteTable,
    #[token("route")]
    Route,
    #[token("internetgateway")]
    InternetGateway,
    #[token("keypair")]
    KeyPair,
    #[token("policy")]
    Policy,
    #[token("group")]
    Group,
    #[token("user")]
    User,
    #[token("tags")]
    Tags,
    #[token("bucket")]
    Bucket,
    #[token("storageobject")]
    StorageObject,
    #[token("volume")]
    Volume,
}

impl EntityKeyword {
    pub const ALL: [EntityKeyword; 16] = [
        EntityKeyword::Vpc,
        EntityKeyword::Subnet,
        EntityKeyword::Instance,
        EntityKeyword::Role,
        EntityKeyword::SecurityGroup,
        EntityKeyword::RouteTable,
        EntityKeyword::Route,
        EntityKeyword::InternetGateway,
        EntityKeyword::KeyPair,
        EntityKeyword::Policy,
        EntityKeyword::Group,
        EntityKeyword::User,
        EntityKeyword::Tags,
        EntityKeyword::Bucket,
        EntityKeyword::StorageObject,
        EntityKeyword::Volume,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKeyword::Vpc => "vpc",
            EntityKeyword::Subnet => "subnet",
            EntityKeyword::Instance => "instance",
            EntityKeyword::Role => "role",
            EntityKeyword::SecurityGroup => "securitygroup",
            EntityKeyword::RouteTable => "routetable",
            EntityKeyword::Route => "route",
            EntityKeyword::InternetGateway => "internetgateway",
            EntityKeyword::KeyPair => "keypair",
            EntityKeyword::Policy => "policy",
            EntityKeyword::Group => "group",
            EntityKeyword::User => "user",
            EntityKeyword::Tags => "tags",
            EntityKeyword::Bucket => "bucket",
            EntityKeyword::StorageObject => "storageobject",
            EntityKeyword::Volume => "volume",
        }
    }
}

/// The run of lowercase ASCII letters starting at `pos`
fn leading_word(buffer: &Buffer, pos: usize) -> String {
    buffer
        .chars()
        .iter()
        .skip(pos)
        .take_while(|c| c.is_ascii_lowercase())
        .collect()
}

pub fn recognize_action(buffer: &Buffer, pos: usize) -> Option<(ActionKeyword, usize)> {
    let word = leading_word(buffer, pos);
    let mut lexer = ActionKeyword::lexer(&word);
    match lexer.next() {
        Some(Ok(keyword)) => Some((keyword, lexer.span().len())),
        _ => None,
    }
}

pub fn recognize_entity(buffer: &Buffer, pos: usize) -> Option<(EntityKeyword, usize)> {
    let word = leading_word(buffer, pos);
    let mut lexer = EntityKeyword::lexer(&word);
    match lexer.next() {
        Some(Ok(keyword)) => Some((keyword, lexer.span().len())),
        _ => None,
    }
}
