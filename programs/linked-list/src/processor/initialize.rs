use crate::state::Node;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    /// Must be a fresh keypair
    #[account(init, payer = payer, space = Node::SPACE)]
    pub node: Account<'info, Node>,
    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>, data: i32) -> Result<()> {
    ctx.accounts.node.init(data);
    msg!("Initialized node {} with {}", ctx.accounts.node.key(), data);
    Ok(())
}
