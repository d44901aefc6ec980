//! Tuner Capability Set
//!
//! What the tuning controller needs from an FM tuner. The TEA5767 driver
//! implements this for hardware; tests implement it with a recording fake.

use crate::types::{Direction, Frequency, ReceiverReading, SignalLevel};

/// FM tuner peripheral
///
/// Status is read as an opaque snapshot; the accessor methods decode it.
/// Searches are issued and then polled for completion, they never block.
pub trait Tuner {
    /// Raw status snapshot
    type Snapshot: Copy;
    /// Bus error
    type Error;

    /// Bring the tuner up
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Tune to `frequency`, leaving search mode
    fn set_frequency(&mut self, frequency: Frequency) -> Result<(), Self::Error>;

    /// Read a status snapshot, None when the tuner has nothing ready
    fn read_status(&mut self) -> Result<Option<Self::Snapshot>, Self::Error>;

    /// Tuned frequency in Hz
    fn frequency_hz(&self, snapshot: &Self::Snapshot) -> u32;

    /// Stereo pilot detected
    fn is_stereo(&self, snapshot: &Self::Snapshot) -> bool;

    /// Receive strength
    fn signal_level(&self, snapshot: &Self::Snapshot) -> SignalLevel;

    /// Start searching upwards from the snapshot's frequency
    fn search_up(&mut self, snapshot: &Self::Snapshot) -> Result<(), Self::Error>;

    /// Start searching downwards from the snapshot's frequency
    fn search_down(&mut self, snapshot: &Self::Snapshot) -> Result<(), Self::Error>;

    /// Check whether the search started in `direction` has concluded
    fn is_search_complete(
        &mut self,
        snapshot: &Self::Snapshot,
        direction: Direction,
    ) -> Result<bool, Self::Error>;

    /// Start a search in `direction`
    fn search(&mut self, snapshot: &Self::Snapshot, direction: Direction) -> Result<(), Self::Error> {
        match direction {
            Direction::Up => self.search_up(snapshot),
            Direction::Down => self.search_down(snapshot),
        }
    }

    /// Decode a snapshot into a reading
    fn reading(&self, snapshot: &Self::Snapshot) -> ReceiverReading {
        ReceiverReading {
            frequency_hz: self.frequency_hz(snapshot),
            stereo: self.is_stereo(snapshot),
            signal: self.signal_level(snapshot),
        }
    }
}
