// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use kibitz_cards::ParseCardError;

/// Errors returned by the evaluator entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The number of cards is not supported by the operation.
    #[error("invalid hand size {0}")]
    InvalidHandSize(usize),
    /// A card token could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseCardError),
}

/// Evaluation result type.
pub type Result<T> = std::result::Result<T, Error>;
