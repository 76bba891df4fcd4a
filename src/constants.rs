// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Values used for every Job the driver spawns
pub mod jobs {
    /// Namespace the Jobs are created in
    pub const NAMESPACE: &str = "default";
    /// Container image run by every Job
    pub const IMAGE: &str = "amacneil/bitcoin";
    /// Name appended to each prefix
    pub const NAME: &str = "bitcoin-miner";
}

/// Driver loop pacing
pub mod driver {
    /// Number of prefixes, starting at 0
    pub const ITERATIONS: u32 = 10;
    /// Pause after each create, in seconds
    pub const INTERVAL_SECS: u64 = 10;
}
