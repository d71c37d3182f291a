use anchor_lang::prelude::*;

pub mod error;
pub mod processor;
pub mod state;

use processor::append::*;
use processor::initialize::*;
use processor::insert_after::*;
use processor::remove::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod linked_list {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, data: i32) -> Result<()> {
        processor::initialize::initialize(ctx, data)
    }

    /// Creates a node holding `data` and links `current_node` to it.
    ///
    /// The link is written at exactly the node given; callers wanting to
    /// extend a chain must pass its tail.
    pub fn append(ctx: Context<Append>, data: i32) -> Result<()> {
        processor::append::append(ctx, data)
    }

    pub fn insert_after(ctx: Context<InsertAfter>, data: i32) -> Result<()> {
        processor::insert_after::insert_after(ctx, data)
    }

    pub fn remove(ctx: Context<Remove>) -> Result<()> {
        processor::remove::remove(ctx)
    }
}
