//! Operation catalog and authorization policy.
//!
//! The catalog is a closed enum: every operation carries its required
//! argument count and the role allowed to invoke it, so dispatch is a match
//! the compiler checks exhaustively instead of an open-ended string chain.
//! Adding an operation means adding a variant; the compiler then points at
//! every table that needs a row.

/// A named operation a caller can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    QueryCar,
    QueryAllCars,
    HelloWorld,
    CheckIdentity,
    InitLedger,
    CreateCar,
    ChangeCarOwner,
    AddRestriction,
    RemoveRestriction,
}

/// Which caller population may invoke an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Open to every organization (reads and diagnostic probes).
    Any,
    /// The dealer organization: create / seed / transfer ownership.
    Dealer,
    /// The police organization: impose and lift restrictions.
    Police,
}

impl Operation {
    /// Every operation in the catalog, for table-driven tests and docs.
    pub const ALL: [Operation; 9] = [
        Operation::QueryCar,
        Operation::QueryAllCars,
        Operation::HelloWorld,
        Operation::CheckIdentity,
        Operation::InitLedger,
        Operation::CreateCar,
        Operation::ChangeCarOwner,
        Operation::AddRestriction,
        Operation::RemoveRestriction,
    ];

    /// Resolve a wire operation name. `None` for anything not in the catalog.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "queryCar" => Some(Operation::QueryCar),
            "queryAllCars" => Some(Operation::QueryAllCars),
            "helloWorld" => Some(Operation::HelloWorld),
            "checkIdentity" => Some(Operation::CheckIdentity),
            "initLedger" => Some(Operation::InitLedger),
            "createCar" => Some(Operation::CreateCar),
            "changeCarOwner" => Some(Operation::ChangeCarOwner),
            "addRestriction" => Some(Operation::AddRestriction),
            "removeRestriction" => Some(Operation::RemoveRestriction),
            _ => None,
        }
    }

    /// The wire name of this operation.
    pub fn name(self) -> &'static str {
        match self {
            Operation::QueryCar => "queryCar",
            Operation::QueryAllCars => "queryAllCars",
            Operation::HelloWorld => "helloWorld",
            Operation::CheckIdentity => "checkIdentity",
            Operation::InitLedger => "initLedger",
            Operation::CreateCar => "createCar",
            Operation::ChangeCarOwner => "changeCarOwner",
            Operation::AddRestriction => "addRestriction",
            Operation::RemoveRestriction => "removeRestriction",
        }
    }

    /// Required argument count, validated before any store access.
    pub fn required_args(self) -> usize {
        match self {
            Operation::QueryCar => 1,
            Operation::QueryAllCars => 0,
            Operation::HelloWorld => 0,
            Operation::CheckIdentity => 0,
            Operation::InitLedger => 0,
            Operation::CreateCar => 5,
            Operation::ChangeCarOwner => 2,
            Operation::AddRestriction => 2,
            Operation::RemoveRestriction => 1,
        }
    }

    /// The role allowed to invoke this operation.
    pub fn role(self) -> Role {
        match self {
            Operation::QueryCar
            | Operation::QueryAllCars
            | Operation::HelloWorld
            | Operation::CheckIdentity => Role::Any,
            Operation::InitLedger | Operation::CreateCar | Operation::ChangeCarOwner => {
                Role::Dealer
            }
            Operation::AddRestriction | Operation::RemoveRestriction => Role::Police,
        }
    }
}

/// Maps role tags to concrete organization labels.
///
/// Pure configuration: constructed once at process start and read-only
/// afterwards. The labels are compared against the organization extracted
/// from the caller credential.
#[derive(Debug, Clone)]
pub struct AuthzPolicy {
    pub dealer_org: String,
    pub police_org: String,
}

impl AuthzPolicy {
    pub fn new(dealer_org: &str, police_org: &str) -> Self {
        Self {
            dealer_org: dealer_org.to_string(),
            police_org: police_org.to_string(),
        }
    }

    /// Whether `organization` may invoke `operation`.
    pub fn is_permitted(&self, operation: Operation, organization: &str) -> bool {
        match operation.role() {
            Role::Any => true,
            Role::Dealer => organization == self.dealer_org,
            Role::Police => organization == self.police_org,
        }
    }
}

impl Default for AuthzPolicy {
    /// Default organization labels matching the development network.
    fn default() -> Self {
        Self::new("aMSP", "bMSP")
    }
}
