//! Calibration session state.
//!
//! One `CalibrationSession` owns everything for a single calibration:
//! the committed reference pair, the provisional pair the operator is
//! still jogging towards, the stock, and the "use calibration" flag.
//! It is an explicitly owned object passed by reference, not a global.
//!
//! There is no error path for partial data: every mutation returns an
//! [`OverlayUpdate`] describing what the external overlay should now
//! show, and incompleteness simply yields `Clear`/`None` updates.
//! Concurrent operator actions (rapid double-submission) resolve by
//! last-write-wins per slot, with recompute-on-write.

use crate::overlay::{OverlayGeometry, OverlayGeometryBuilder};
use originkit_core::data::{CalibrationPair, MachinePoint, StockDimensions};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Which of the two reference points an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    A,
    B,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// What the external overlay should do after a session mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayUpdate {
    /// Render this geometry, replacing whatever was shown before.
    /// `active` names the slot currently being measured, if any, so its
    /// marker can be drawn in the in-flight color.
    Render {
        geometry: OverlayGeometry,
        active: Option<Slot>,
    },
    /// Remove any existing overlay; the calibration is not usable.
    Clear,
    /// Nothing to change.
    None,
}

/// The authoritative store for one calibration session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalibrationSession {
    stock: StockDimensions,
    committed: CalibrationPair,
    provisional: CalibrationPair,
    use_calibration: bool,
}

impl CalibrationSession {
    /// Start a fresh session for the given stock
    pub fn new(stock: StockDimensions) -> Self {
        Self {
            stock,
            committed: CalibrationPair::default(),
            provisional: CalibrationPair::default(),
            use_calibration: false,
        }
    }

    /// The stock this session calibrates against
    pub fn stock(&self) -> &StockDimensions {
        &self.stock
    }

    /// The committed reference pair
    pub fn committed(&self) -> &CalibrationPair {
        &self.committed
    }

    /// The provisional (mid-measurement) pair
    pub fn provisional(&self) -> &CalibrationPair {
        &self.provisional
    }

    /// Whether the committed pair is complete and may drive dependent
    /// features
    pub fn is_ready(&self) -> bool {
        self.committed.is_complete(self.stock.is_rotate)
    }

    /// Whether the operator has opted into applying this calibration
    pub fn use_calibration(&self) -> bool {
        self.use_calibration
    }

    /// Opt into applying the calibration. Refused (returns false) while
    /// the committed pair is incomplete.
    pub fn set_use_calibration(&mut self, enabled: bool) -> bool {
        if enabled && !self.is_ready() {
            return false;
        }
        self.use_calibration = enabled;
        true
    }

    fn slot_mut(pair: &mut CalibrationPair, slot: Slot) -> &mut MachinePoint {
        match slot {
            Slot::A => &mut pair.a,
            Slot::B => &mut pair.b,
        }
    }

    fn slot_of(pair: &CalibrationPair, slot: Slot) -> &MachinePoint {
        match slot {
            Slot::A => &pair.a,
            Slot::B => &pair.b,
        }
    }

    /// Commit a measured point into a slot.
    ///
    /// Recomputes the committed overlay when both slots are now complete;
    /// otherwise any existing overlay must be cleared, and the
    /// use-calibration flag drops with it.
    pub fn set_point(&mut self, slot: Slot, point: MachinePoint) -> OverlayUpdate {
        *Self::slot_mut(&mut self.committed, slot) = point;
        debug!(%slot, %point, "committed calibration point");

        match OverlayGeometryBuilder::build(&self.committed, &self.stock, true) {
            Some(geometry) => OverlayUpdate::Render {
                geometry,
                active: None,
            },
            None => {
                self.use_calibration = false;
                OverlayUpdate::Clear
            }
        }
    }

    /// Store a point the operator is still measuring (not yet committed).
    ///
    /// When the other provisional slot is already complete this yields a
    /// live, non-highlighted preview of the candidate rectangle; until
    /// then the point is only stored.
    pub fn set_provisional_point(&mut self, slot: Slot, point: MachinePoint) -> OverlayUpdate {
        *Self::slot_mut(&mut self.provisional, slot) = point;
        debug!(%slot, %point, "provisional calibration point");

        let other = match slot {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        };
        if !Self::slot_of(&self.provisional, other).is_position_complete(self.stock.is_rotate) {
            return OverlayUpdate::None;
        }

        match OverlayGeometryBuilder::build(&self.provisional, &self.stock, false) {
            Some(geometry) => OverlayUpdate::Render {
                geometry,
                active: Some(slot),
            },
            None => OverlayUpdate::None,
        }
    }

    /// Reset both pairs to unset, disable dependent features, and tear
    /// the overlay down. Idempotent.
    pub fn clear(&mut self) -> OverlayUpdate {
        self.committed = CalibrationPair::default();
        self.provisional = CalibrationPair::default();
        self.use_calibration = false;
        debug!("calibration cleared");
        OverlayUpdate::Clear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> CalibrationSession {
        CalibrationSession::new(StockDimensions::flat(100.0, 60.0))
    }

    #[test]
    fn test_set_point_renders_when_complete() {
        let mut session = session();
        assert_eq!(
            session.set_point(Slot::A, MachinePoint::xy(10.0, 5.0)),
            OverlayUpdate::Clear
        );
        assert!(!session.is_ready());

        let update = session.set_point(Slot::B, MachinePoint::xy(40.0, 25.0));
        let OverlayUpdate::Render { geometry, active } = update else {
            panic!("expected a render update, got {update:?}");
        };
        assert!(geometry.highlighted);
        assert_eq!(active, None);
        assert!(session.is_ready());
    }

    #[test]
    fn test_overwriting_with_incomplete_point_clears() {
        let mut session = session();
        session.set_point(Slot::A, MachinePoint::xy(10.0, 5.0));
        session.set_point(Slot::B, MachinePoint::xy(40.0, 25.0));
        assert!(session.set_use_calibration(true));

        // last write wins; breaking the pair drops the flag too
        let update = session.set_point(Slot::B, MachinePoint::new());
        assert_eq!(update, OverlayUpdate::Clear);
        assert!(!session.use_calibration());
    }

    #[test]
    fn test_provisional_preview_needs_other_slot() {
        let mut session = session();
        assert_eq!(
            session.set_provisional_point(Slot::A, MachinePoint::xy(10.0, 5.0)),
            OverlayUpdate::None
        );

        let update = session.set_provisional_point(Slot::B, MachinePoint::xy(40.0, 25.0));
        let OverlayUpdate::Render { geometry, active } = update else {
            panic!("expected a render update, got {update:?}");
        };
        assert!(!geometry.highlighted);
        assert_eq!(active, Some(Slot::B));

        // the provisional pair never makes the calibration usable
        assert!(!session.is_ready());
        assert!(!session.set_use_calibration(true));
    }

    #[test]
    fn test_rotary_session_keys_on_b_axis() {
        let mut session = CalibrationSession::new(StockDimensions::rotary(125.6, 75.0));
        session.set_point(Slot::A, MachinePoint::by(10.0, 20.0));
        let update = session.set_point(Slot::B, MachinePoint::by(60.0, 50.0));
        assert!(matches!(update, OverlayUpdate::Render { .. }));

        // X-only points leave a rotary session unusable
        let update = session.set_point(Slot::B, MachinePoint::xy(60.0, 50.0));
        assert_eq!(update, OverlayUpdate::Clear);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut session = session();
        session.set_point(Slot::A, MachinePoint::xy(10.0, 5.0));
        session.set_point(Slot::B, MachinePoint::xy(40.0, 25.0));
        session.set_provisional_point(Slot::A, MachinePoint::xy(1.0, 1.0));
        session.set_use_calibration(true);

        assert_eq!(session.clear(), OverlayUpdate::Clear);
        let snapshot = session.clone();
        assert_eq!(session.clear(), OverlayUpdate::Clear);

        assert_eq!(session.committed(), snapshot.committed());
        assert_eq!(session.provisional(), snapshot.provisional());
        assert!(session.committed().a.is_empty());
        assert!(!session.use_calibration());
    }
}
