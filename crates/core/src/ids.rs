// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Identifier synthesis for converted bugs.
//!
//! Ditz ids are SHA-1 hex strings, which Bugs Everywhere does not accept, so
//! every bug gets a fresh UUID at conversion time.

use uuid::Uuid;

/// Source of fresh bug identifiers.
pub trait IdSource {
    /// Returns an identifier not handed out before by this source.
    fn next_id(&mut self) -> Uuid;
}

/// Random (version 4) UUIDs. Used for real conversions.
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Counting UUIDs starting at `00000000-0000-0000-0000-000000000001`.
///
/// Produces byte-identical documents across runs, which makes it the
/// source of choice in tests.
#[derive(Debug, Default)]
pub struct SequentialIds {
    issued: u128,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> Uuid {
        self.issued += 1;
        Uuid::from_u128(self.issued)
    }
}

impl<I: IdSource + ?Sized> IdSource for &mut I {
    fn next_id(&mut self) -> Uuid {
        (**self).next_id()
    }
}

#[cfg(test)]
#[path = "ids_tests.rs"]
mod tests;
