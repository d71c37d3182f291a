use crate::state::Node;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct Append<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,
    #[account(mut)]
    pub current_node: Account<'info, Node>,
    /// Must be a fresh keypair
    #[account(init, payer = payer, space = Node::SPACE)]
    pub new_node: Account<'info, Node>,
    pub system_program: Program<'info, System>,
}

pub fn append(ctx: Context<Append>, data: i32) -> Result<()> {
    let current_node = &mut ctx.accounts.current_node;
    let new_node = &mut ctx.accounts.new_node;
    let new_key = new_node.key();

    if let Some(previous) = current_node.next {
        msg!("Overwriting link {} -> {}", current_node.key(), previous);
    }
    current_node.append(new_key, new_node, data);

    msg!("Appended {} after {}", new_key, current_node.key());
    Ok(())
}
