//! Host fakes shared by the integration tests

#![allow(dead_code)]

use fm_panel::radio::tuner::Tuner;
use fm_panel::types::{Direction, Frequency, SignalLevel};
use fm_panel::ui::{CharacterDisplay, GlyphBitmap, COLUMNS, ROWS};

/// Injected bus failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusFault;

// =============================================================================
// Display Fake
// =============================================================================

/// Character grid that records what was drawn
pub struct FakeDisplay {
    pub grid: [[u8; COLUMNS as usize]; ROWS as usize],
    pub glyphs: [Option<GlyphBitmap>; 8],
    pub cursor: (u8, u8),
    /// Every (col, row, glyph) written to the scale row
    pub scale_writes: Vec<(u8, u8)>,
    pub fail: bool,
}

impl FakeDisplay {
    pub fn new() -> Self {
        Self {
            grid: [[b'.'; COLUMNS as usize]; ROWS as usize],
            glyphs: [None; 8],
            cursor: (0, 0),
            scale_writes: Vec::new(),
            fail: false,
        }
    }

    /// Cells `from..to` of `row`
    pub fn cells(&self, row: usize, from: usize, to: usize) -> &[u8] {
        &self.grid[row][from..to]
    }

    /// Row 0 as text, user glyph slots shown as their digit
    pub fn status_line(&self) -> String {
        self.grid[0]
            .iter()
            .map(|&c| if c < 8 { char::from(b'0' + c) } else { char::from(c) })
            .collect()
    }

    /// Cells on the scale row holding a needle glyph
    pub fn needles(&self) -> Vec<usize> {
        self.grid[1]
            .iter()
            .enumerate()
            .filter(|&(_, &g)| g < 5)
            .map(|(i, _)| i)
            .collect()
    }

    fn put(&mut self, glyph: u8) -> Result<(), BusFault> {
        if self.fail {
            return Err(BusFault);
        }
        let (col, row) = self.cursor;
        if col < COLUMNS && row < ROWS {
            self.grid[row as usize][col as usize] = glyph;
            if row == 1 {
                self.scale_writes.push((col, glyph));
            }
        }
        self.cursor.0 = col.saturating_add(1);
        Ok(())
    }
}

impl CharacterDisplay for FakeDisplay {
    type Error = BusFault;

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), BusFault> {
        if self.fail {
            return Err(BusFault);
        }
        self.cursor = (col, row);
        Ok(())
    }

    fn write_glyph(&mut self, glyph: u8) -> Result<(), BusFault> {
        self.put(glyph)
    }

    fn write_text(&mut self, text: &str) -> Result<(), BusFault> {
        text.bytes().try_for_each(|b| self.put(b))
    }

    fn define_glyph(&mut self, id: u8, bitmap: &GlyphBitmap) -> Result<(), BusFault> {
        if self.fail {
            return Err(BusFault);
        }
        self.glyphs[usize::from(id & 7)] = Some(*bitmap);
        Ok(())
    }
}

// =============================================================================
// Tuner Fake
// =============================================================================

/// Snapshot handed out by [`FakeTuner`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FakeStatus {
    pub hz: u32,
    pub stereo: bool,
    pub level: u8,
}

/// Commands the controller issued
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Init,
    SetFrequency(Frequency),
    Search(Direction, u32),
    CompletionPoll(Direction),
}

/// Tuner that reports whatever it was last told to tune to
pub struct FakeTuner {
    pub hz: u32,
    pub stereo: bool,
    pub level: u8,
    /// Status reads return nothing while false
    pub ready: bool,
    /// Completion polls still answered with "not yet"
    pub polls_until_found: u32,
    /// Where a search lands; reported as soon as the search is issued
    pub station: Frequency,
    pub commands: Vec<Command>,
    pub fail: bool,
    /// Only retune commands fail
    pub fail_retune: bool,
    /// Only search commands fail
    pub fail_search: bool,
}

impl FakeTuner {
    pub fn new() -> Self {
        Self {
            hz: 0,
            stereo: false,
            level: 0,
            ready: true,
            polls_until_found: 0,
            station: Frequency::MIN,
            commands: Vec::new(),
            fail: false,
            fail_retune: false,
            fail_search: false,
        }
    }

    /// Tuned frequencies in issue order
    pub fn retunes(&self) -> Vec<Frequency> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::SetFrequency(f) => Some(*f),
                _ => None,
            })
            .collect()
    }

    pub fn searches(&self) -> Vec<Direction> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                Command::Search(d, _) => Some(*d),
                _ => None,
            })
            .collect()
    }

    fn check(&self) -> Result<(), BusFault> {
        if self.fail {
            Err(BusFault)
        } else {
            Ok(())
        }
    }
}

impl Tuner for FakeTuner {
    type Snapshot = FakeStatus;
    type Error = BusFault;

    fn init(&mut self) -> Result<(), BusFault> {
        self.check()?;
        self.commands.push(Command::Init);
        Ok(())
    }

    fn set_frequency(&mut self, frequency: Frequency) -> Result<(), BusFault> {
        self.check()?;
        if self.fail_retune {
            return Err(BusFault);
        }
        self.hz = frequency.as_hz();
        self.commands.push(Command::SetFrequency(frequency));
        Ok(())
    }

    fn read_status(&mut self) -> Result<Option<FakeStatus>, BusFault> {
        self.check()?;
        Ok(self.ready.then_some(FakeStatus {
            hz: self.hz,
            stereo: self.stereo,
            level: self.level,
        }))
    }

    fn frequency_hz(&self, snapshot: &FakeStatus) -> u32 {
        snapshot.hz
    }

    fn is_stereo(&self, snapshot: &FakeStatus) -> bool {
        snapshot.stereo
    }

    fn signal_level(&self, snapshot: &FakeStatus) -> SignalLevel {
        SignalLevel::from_raw(snapshot.level)
    }

    fn search_up(&mut self, snapshot: &FakeStatus) -> Result<(), BusFault> {
        self.check()?;
        if self.fail_search {
            return Err(BusFault);
        }
        self.commands.push(Command::Search(Direction::Up, snapshot.hz));
        self.hz = self.station.as_hz();
        Ok(())
    }

    fn search_down(&mut self, snapshot: &FakeStatus) -> Result<(), BusFault> {
        self.check()?;
        if self.fail_search {
            return Err(BusFault);
        }
        self.commands.push(Command::Search(Direction::Down, snapshot.hz));
        self.hz = self.station.as_hz();
        Ok(())
    }

    fn is_search_complete(&mut self, _snapshot: &FakeStatus, direction: Direction) -> Result<bool, BusFault> {
        self.check()?;
        self.commands.push(Command::CompletionPoll(direction));
        if self.polls_until_found > 0 {
            self.polls_until_found -= 1;
            return Ok(false);
        }
        Ok(true)
    }
}
