//! Resource clients. Each method maps typed arguments to one endpoint path
//! and unwrap policy, then makes a single [`Client::fetch`](crate::Client::fetch) call.

mod bills;
pub use self::bills::BillsClient;

mod committees;
pub use self::committees::CommitteesClient;

mod members;
pub use self::members::MembersClient;

mod nominations;
pub use self::nominations::NominationsClient;

mod votes;
pub use self::votes::VotesClient;
