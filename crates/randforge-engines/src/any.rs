//! The closed engine family as a single tagged variant.

use std::fmt;
use std::str::FromStr;

use randforge_core::engine::Engine;
use randforge_core::error::RandomError;
use serde::{Deserialize, Serialize};

use crate::{SplitMix64, XorShift1024Star, XorShift128Plus, XorShiftAdd, Xoroshiro128Plus};

/// Names the concrete recurrence backing an [`AnyEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// [`SplitMix64`]
    SplitMix64,
    /// [`XorShift128Plus`]
    XorShift128Plus,
    /// [`Xoroshiro128Plus`]
    #[default]
    Xoroshiro128Plus,
    /// [`XorShift1024Star`]
    XorShift1024Star,
    /// [`XorShiftAdd`]
    XorShiftAdd,
}

impl EngineKind {
    /// Every engine kind.
    pub const ALL: [Self; 5] = [
        Self::SplitMix64,
        Self::XorShift128Plus,
        Self::Xoroshiro128Plus,
        Self::XorShift1024Star,
        Self::XorShiftAdd,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SplitMix64 => "splitmix64",
            Self::XorShift128Plus => "xorshift128plus",
            Self::Xoroshiro128Plus => "xoroshiro128plus",
            Self::XorShift1024Star => "xorshift1024star",
            Self::XorShiftAdd => "xorshiftadd",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = RandomError;

    /// Accepts the canonical names case-insensitively, ignoring `-` and `_`,
    /// with `+` and `*` as shorthand for `plus` and `star`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .replace('+', "plus")
            .replace('*', "star")
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();

        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| RandomError::invalid(format!("unknown engine kind: {s}")))
    }
}

/// Any engine of the family, dispatched by tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyEngine {
    /// A [`SplitMix64`] engine.
    SplitMix64(SplitMix64),
    /// A [`XorShift128Plus`] engine.
    XorShift128Plus(XorShift128Plus),
    /// A [`Xoroshiro128Plus`] engine.
    Xoroshiro128Plus(Xoroshiro128Plus),
    /// A [`XorShift1024Star`] engine.
    XorShift1024Star(XorShift1024Star),
    /// A [`XorShiftAdd`] engine.
    XorShiftAdd(XorShiftAdd),
}

macro_rules! dispatch {
    ($self:expr, $engine:ident => $body:expr) => {
        match $self {
            AnyEngine::SplitMix64($engine) => $body,
            AnyEngine::XorShift128Plus($engine) => $body,
            AnyEngine::Xoroshiro128Plus($engine) => $body,
            AnyEngine::XorShift1024Star($engine) => $body,
            AnyEngine::XorShiftAdd($engine) => $body,
        }
    };
}

macro_rules! construct {
    ($kind:expr, $constructor:ident ( $($arg:expr),* )) => {
        match $kind {
            EngineKind::SplitMix64 => Self::SplitMix64(SplitMix64::$constructor($($arg),*)),
            EngineKind::XorShift128Plus => {
                Self::XorShift128Plus(XorShift128Plus::$constructor($($arg),*))
            }
            EngineKind::Xoroshiro128Plus => {
                Self::Xoroshiro128Plus(Xoroshiro128Plus::$constructor($($arg),*))
            }
            EngineKind::XorShift1024Star => {
                Self::XorShift1024Star(XorShift1024Star::$constructor($($arg),*))
            }
            EngineKind::XorShiftAdd => Self::XorShiftAdd(XorShiftAdd::$constructor($($arg),*)),
        }
    };
}

impl AnyEngine {
    /// Creates an engine of `kind` by expanding a 64-bit seed.
    #[must_use]
    pub fn from_seed_u64(kind: EngineKind, seed: u64) -> Self {
        construct!(kind, from_seed_u64(seed))
    }

    /// Creates an engine of `kind` from hashed seed bytes.
    #[must_use]
    pub fn from_seed_bytes(kind: EngineKind, seed: &[u8]) -> Self {
        construct!(kind, from_seed_bytes(seed))
    }

    /// Creates an engine of `kind` from a hashed string seed.
    #[must_use]
    pub fn from_seed_str(kind: EngineKind, seed: &str) -> Self {
        construct!(kind, from_seed_str(seed))
    }

    /// Creates an engine of `kind` seeded from OS entropy.
    #[must_use]
    pub fn from_entropy(kind: EngineKind) -> Self {
        construct!(kind, from_entropy())
    }

    /// Returns the tag of the backing engine.
    #[must_use]
    pub fn kind(&self) -> EngineKind {
        match self {
            Self::SplitMix64(_) => EngineKind::SplitMix64,
            Self::XorShift128Plus(_) => EngineKind::XorShift128Plus,
            Self::Xoroshiro128Plus(_) => EngineKind::Xoroshiro128Plus,
            Self::XorShift1024Star(_) => EngineKind::XorShift1024Star,
            Self::XorShiftAdd(_) => EngineKind::XorShiftAdd,
        }
    }
}

impl Engine for AnyEngine {
    fn next_u32(&mut self) -> u32 {
        dispatch!(self, e => e.next_u32())
    }

    fn next_u64(&mut self) -> u64 {
        dispatch!(self, e => e.next_u64())
    }

    fn next_u32_pair(&mut self) -> (u32, u32) {
        dispatch!(self, e => e.next_u32_pair())
    }

    fn skip_ahead(&mut self) {
        dispatch!(self, e => e.skip_ahead());
    }

    fn skip_ahead_stride_log2(&self) -> u32 {
        dispatch!(self, e => e.skip_ahead_stride_log2())
    }

    fn boxed_clone(&self) -> Box<dyn Engine + Send> {
        Box::new(self.clone())
    }
}

impl From<SplitMix64> for AnyEngine {
    fn from(engine: SplitMix64) -> Self {
        Self::SplitMix64(engine)
    }
}

impl From<XorShift128Plus> for AnyEngine {
    fn from(engine: XorShift128Plus) -> Self {
        Self::XorShift128Plus(engine)
    }
}

impl From<Xoroshiro128Plus> for AnyEngine {
    fn from(engine: Xoroshiro128Plus) -> Self {
        Self::Xoroshiro128Plus(engine)
    }
}

impl From<XorShift1024Star> for AnyEngine {
    fn from(engine: XorShift1024Star) -> Self {
        Self::XorShift1024Star(engine)
    }
}

impl From<XorShiftAdd> for AnyEngine {
    fn from(engine: XorShiftAdd) -> Self {
        Self::XorShiftAdd(engine)
    }
}
