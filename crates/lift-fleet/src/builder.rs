//! Fluent builder for constructing a [`FleetStore`].

use lift_core::{Floor, LiftError, LiftId, LiftResult};

use crate::{FleetStore, Lift};

/// Fluent builder for [`FleetStore`].
///
/// ```rust
/// use lift_core::Floor;
/// use lift_fleet::FleetBuilder;
///
/// let fleet = FleetBuilder::new(2)
///     .initial_floors(vec![Floor(1), Floor(10)])
///     .build()
///     .unwrap();
/// assert_eq!(fleet.len(), 2);
/// ```
pub struct FleetBuilder {
    count:  usize,
    floors: Option<Vec<Floor>>,
}

impl FleetBuilder {
    pub fn new(count: usize) -> Self {
        Self { count, floors: None }
    }

    /// Park each lift at a given floor instead of the ground floor.
    ///
    /// Must be length `count`.  Range checks against the building height
    /// happen in `lift-sim`, which knows `total_floors`.
    pub fn initial_floors(mut self, floors: Vec<Floor>) -> Self {
        self.floors = Some(floors);
        self
    }

    pub fn build(self) -> LiftResult<FleetStore> {
        if self.count == 0 {
            return Err(LiftError::InvalidConfiguration(
                "fleet needs at least one lift".to_owned(),
            ));
        }

        let floors = match self.floors {
            Some(f) => {
                if f.len() != self.count {
                    return Err(LiftError::InvalidConfiguration(format!(
                        "{} initial floors given for {} lifts",
                        f.len(),
                        self.count
                    )));
                }
                f
            }
            None => vec![Floor::GROUND; self.count],
        };

        let lifts = floors
            .into_iter()
            .enumerate()
            .map(|(i, floor)| Lift::at(LiftId(i as u32), floor))
            .collect();

        Ok(FleetStore::from_lifts(lifts))
    }
}
