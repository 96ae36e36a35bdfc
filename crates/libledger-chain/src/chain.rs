//! # The Checkout Chain
//!
//! An ordered sequence of [`Block`]s from genesis to the current tail.
//! The chain exclusively owns its blocks: it is mutated only by [`Chain::append`],
//! never truncated or reordered, and external callers receive read-only views
//! or cloned snapshots.
//!
//! ## Integrity Model
//!
//! 1. Each candidate block is validated against the current tail before it
//!    is retained: linkage, self-commitment, then sequence (short-circuit
//!    in that order).
//! 2. A rejected candidate is returned to the caller as a typed
//!    [`ChainError`]; an append is never a fire-and-forget mutation.
//! 3. [`Chain::verify`] re-walks the full sequence, so any retroactive edit
//!    of stored history surfaces as a hash mismatch.

use crate::block::Block;
use crate::error::ChainError;
use crate::event::CheckoutEvent;

/// The append-only checkout ledger.
///
/// ## Concurrency
///
/// `Chain` itself is single-owner. Callers sharing it across threads must
/// serialize `append` (the HTTP layer wraps it in a mutex), so that
/// "read tail → build candidate → validate → push" is one atomic unit and
/// the chain can never hold duplicate or gapped positions.
#[derive(Debug)]
pub struct Chain {
    blocks: Vec<Block>,
}

impl Chain {
    /// Create a chain containing exactly the genesis block.
    ///
    /// The genesis block is the trust anchor; every later validation traces
    /// back to it. There is no externally observable uninitialized state.
    pub fn genesis() -> Result<Self, ChainError> {
        Ok(Self {
            blocks: vec![Block::genesis()?],
        })
    }

    /// Number of blocks in the chain. Always at least 1.
    pub fn height(&self) -> u64 {
        self.blocks.len() as u64
    }

    /// The most recently appended block.
    pub fn tail(&self) -> &Block {
        // Non-empty by construction: genesis() seeds one block and append
        // only grows the sequence.
        &self.blocks[self.blocks.len() - 1]
    }

    /// Read-only view of the full chain in position order, genesis first.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Cloned copy of the full chain for external serialization.
    pub fn snapshot(&self) -> Vec<Block> {
        self.blocks.clone()
    }

    /// Append a checkout event to the chain.
    ///
    /// Constructs a candidate block referencing the current tail, validates
    /// it with [`Chain::validate_link`], and retains it only if every check
    /// passes. On success the sequence grows by exactly one element and the
    /// committed block is returned; no other state changes.
    ///
    /// # Errors
    ///
    /// Construction faults ([`ChainError::PositionExhausted`],
    /// [`ChainError::Canonicalization`]) and validation rejections
    /// ([`ChainError::LinkageViolation`], [`ChainError::IntegrityViolation`],
    /// [`ChainError::SequenceViolation`]) are all surfaced to the caller;
    /// a rejected event is never silently dropped.
    pub fn append(&mut self, payload: CheckoutEvent) -> Result<Block, ChainError> {
        let candidate = Block::next(self.tail(), payload)?;
        Self::validate_link(&candidate, self.tail())?;
        self.blocks.push(candidate.clone());
        Ok(candidate)
    }

    /// The acceptance rule for a candidate block against the current tail.
    ///
    /// Checks are evaluated in order with short-circuit on first failure:
    ///
    /// 1. Linkage: `candidate.previous_hash == tail.hash`.
    /// 2. Self-consistency: the candidate's stored hash reproduces from its
    ///    own fields.
    /// 3. Sequence: `candidate.position == tail.position + 1`.
    pub fn validate_link(candidate: &Block, tail: &Block) -> Result<(), ChainError> {
        if candidate.previous_hash != tail.hash {
            return Err(ChainError::LinkageViolation {
                position: candidate.position,
                candidate: candidate.previous_hash.clone(),
                tail: tail.hash.clone(),
            });
        }
        if !candidate.verify_commitment(&candidate.hash) {
            return Err(ChainError::IntegrityViolation {
                position: candidate.position,
            });
        }
        let expected = tail.position.checked_add(1).ok_or(ChainError::PositionExhausted {
            position: tail.position,
        })?;
        if candidate.position != expected {
            return Err(ChainError::SequenceViolation {
                expected,
                actual: candidate.position,
            });
        }
        Ok(())
    }

    /// Audit the full chain from genesis to tail.
    ///
    /// Verifies the genesis shape (position 0, empty previous hash, genesis
    /// payload), every adjacent linkage and position step, and every block's
    /// self-commitment. Returns the first violation found; an
    /// [`ChainError::IntegrityViolation`] from this walk means stored
    /// history has been altered.
    pub fn verify(&self) -> Result<(), ChainError> {
        let genesis = &self.blocks[0];
        if genesis.position != 0 || !genesis.previous_hash.is_empty() || !genesis.payload.is_genesis
        {
            return Err(ChainError::IntegrityViolation { position: genesis.position });
        }
        for block in &self.blocks {
            if !block.verify_commitment(&block.hash) {
                return Err(ChainError::IntegrityViolation {
                    position: block.position,
                });
            }
        }
        for pair in self.blocks.windows(2) {
            Self::validate_link(&pair[1], &pair[0])?;
        }
        Ok(())
    }
}
