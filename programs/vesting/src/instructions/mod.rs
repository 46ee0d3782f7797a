pub mod create_vest;
pub mod create_employee;
pub mod claim_tokens;
pub mod quote_claim;

pub use create_vest::*;
pub use create_employee::*;
pub use claim_tokens::*;
pub use quote_claim::*;
