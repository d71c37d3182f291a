use crate::{error::LinkedListError, state::Node};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Remove<'info> {
    #[account(mut)]
    pub current_node: Account<'info, Node>,
    /// Node being unlinked. Its account is not closed.
    pub next_node: Account<'info, Node>,
}

pub fn remove(ctx: Context<Remove>) -> Result<()> {
    let next_node = &ctx.accounts.next_node;
    let current_node = &mut ctx.accounts.current_node;

    require_keys_neq!(
        current_node.key(),
        next_node.key(),
        LinkedListError::InvalidReference
    );
    current_node.remove_next(next_node.key(), next_node)?;

    match current_node.next {
        Some(successor) => msg!(
            "Removed {}, {} now links to {}",
            next_node.key(),
            current_node.key(),
            successor
        ),
        None => msg!(
            "Removed {}, {} is now the tail",
            next_node.key(),
            current_node.key()
        ),
    }
    Ok(())
}
