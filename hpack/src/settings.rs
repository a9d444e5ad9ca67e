//! Tracks pending `SETTINGS_HEADER_TABLE_SIZE` changes so the encoder can
//! emit the required dynamic-table-size-update directives ([6.3]) before
//! its next header block, and so the decoder can validate size-update
//! directives it receives against the bound the caller has agreed to.
//!
//! [6.3]: https://tools.ietf.org/html/rfc7541#section-6.3

use std::{error, fmt};

/// Returned when a `SETTINGS_HEADER_TABLE_SIZE` notification carries a
/// non-positive value.
#[derive(Debug, PartialEq)]
pub struct SettingsError;

impl fmt::Display for SettingsError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "SETTINGS_HEADER_TABLE_SIZE must be a positive value.")
    }
}

impl error::Error for SettingsError {}

/// The codec's view of `SETTINGS_HEADER_TABLE_SIZE` negotiation.
///
/// `last_settings_max` is `None` until the first notification arrives, and
/// from then on holds the most recently notified value.
#[derive(Debug)]
pub struct Settings {
    last_settings_max: Option<u32>,
    pending_updates: Vec<u32>,
    must_emit_update: bool,
}

impl Settings {
    pub fn new() -> Self {
        Self {
            last_settings_max: None,
            pending_updates: Vec::new(),
            must_emit_update: false,
        }
    }

    pub fn received(&self) -> bool {
        self.last_settings_max.is_some()
    }

    pub fn last_settings_max(&self) -> Option<u32> {
        self.last_settings_max
    }

    pub fn must_emit_update(&self) -> bool {
        self.must_emit_update
    }

    /// Records a new `SETTINGS_HEADER_TABLE_SIZE` value. The caller is
    /// still responsible for applying `new_max` to both dynamic tables.
    pub fn notify(&mut self, new_max: u32) -> Result<(), SettingsError> {
        if new_max == 0 {
            return Err(SettingsError);
        }

        tracing::debug!(new_max, "settings change queued");

        self.last_settings_max = Some(new_max);
        self.pending_updates.push(new_max);
        self.must_emit_update = true;

        Ok(())
    }

    /// Takes the queued size-update values that must be emitted before the
    /// next header block, clearing the pending queue and the emit flag.
    pub fn drain_pending(&mut self) -> Vec<u32> {
        self.must_emit_update = false;
        std::mem::take(&mut self.pending_updates)
    }

    /// Validates a size-update directive received by the decoder against
    /// `last_settings_max`, per §4.5.
    pub fn validate_decoded(&self, new_size: u32) -> bool {
        match self.last_settings_max {
            Some(max) => new_size <= max,
            None => true,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}
