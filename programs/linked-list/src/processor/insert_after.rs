use crate::{error::LinkedListError, state::Node};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct InsertAfter<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(mut)]
    pub current_node: Account<'info, Node>,
    /// Must be a fresh keypair
    #[account(init, payer = payer, space = Node::SPACE)]
    pub new_node: Account<'info, Node>,
    /// Current successor of `current_node`, left untouched
    pub next_node: Account<'info, Node>,
    pub system_program: Program<'info, System>,
}

pub fn insert_after(ctx: Context<InsertAfter>, data: i32) -> Result<()> {
    let next_key = ctx.accounts.next_node.key();
    let current_node = &mut ctx.accounts.current_node;
    let new_node = &mut ctx.accounts.new_node;
    let new_key = new_node.key();

    require_keys_neq!(
        current_node.key(),
        next_key,
        LinkedListError::InvalidReference
    );
    current_node.insert_after(new_key, new_node, next_key, data)?;

    msg!(
        "Inserted {} between {} and {}",
        new_key,
        current_node.key(),
        next_key
    );
    Ok(())
}
