use anchor_lang::prelude::*;

#[error_code]
pub enum LinkedListError {
    #[msg("Current node does not link to the given next node")]
    LinkMismatch,
    #[msg("Account cannot be used as the given node reference")]
    InvalidReference,
}
