use anchor_lang::prelude::*;

use crate::error::LinkedListError;

/// One element of a singly linked list.
///
/// Every node lives in its own account. The chain only exists as `next`
/// links between node accounts, so the program never sees more of it than
/// the accounts passed to an instruction.
#[derive(Debug)]
#[account]
pub struct Node {
    pub data: i32,
    pub next: Option<Pubkey>,
}

impl Node {
    /// 8 (discriminator) + 4 (data) + 1 (option tag) + 32 (pubkey)
    pub const SPACE: usize = 8 + 4 + 1 + 32;

    /// Writes a fresh node with no successor
    pub fn init(&mut self, data: i32) {
        self.data = data;
        self.next = None;
    }

    /// Initializes `new_node` and links this node to it, replacing
    /// whatever link this node held before.
    pub fn append(&mut self, new_key: Pubkey, new_node: &mut Node, data: i32) {
        new_node.init(data);
        self.next = Some(new_key);
    }

    /// Places `new_node` between this node and `next_key`.
    ///
    /// Fails without writing anything unless this node currently links to
    /// `next_key`.
    pub fn insert_after(
        &mut self,
        new_key: Pubkey,
        new_node: &mut Node,
        next_key: Pubkey,
        data: i32,
    ) -> Result<()> {
        self.ensure_next(&next_key)?;

        new_node.init(data);
        new_node.next = Some(next_key);
        self.next = Some(new_key);
        Ok(())
    }

    /// Skips over `next_node`, taking on its successor.
    ///
    /// `next_node` itself is left as it was.
    pub fn remove_next(&mut self, next_key: Pubkey, next_node: &Node) -> Result<()> {
        self.ensure_next(&next_key)?;

        self.next = next_node.next;
        Ok(())
    }

    fn ensure_next(&self, expected: &Pubkey) -> Result<()> {
        if self.next.as_ref() != Some(expected) {
            msg!(
                "Stale link: node points to {:?}, caller expected {}",
                self.next,
                expected
            );
            return err!(LinkedListError::LinkMismatch);
        }
        Ok(())
    }
}
