// SPDX-FileCopyrightText: 2026 Siphon Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default notification sink.

use siphon_core::traits::NotificationSink;

/// Writes announcement lines to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl NotificationSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{line}");
    }
}
