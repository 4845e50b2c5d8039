// SPDX-FileCopyrightText: 2026 Siphon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Line-oriented sink for "loaded plugin" announcements.

/// Receives one formatted line per newly announced plugin package:
/// `<timestamp>: Loaded plugin <name> (<version>)`.
///
/// The line format is part of the user-facing contract, so announcements go
/// through this sink rather than the `tracing` layer.
pub trait NotificationSink: Send + Sync {
    fn emit(&self, line: &str);
}
