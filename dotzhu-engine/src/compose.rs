//! Cell-sequence composition with speculative commit.
//!
//! Finalized cells accumulate against the Chinese table. The shortest
//! complete match is surfaced immediately as a tentative reading; if a
//! later cell extends the sequence to a longer entry, the tentative text
//! is retracted and replaced. Resolved readings pile up as units of the
//! current syllable until a tone or a literal completes it, at which
//! point the syllable is flushed to the caller.

use std::mem;

use tracing::{debug, trace};

use crate::cell::Cell;
use crate::error::ComposeError;
use crate::table::{CellMatch, CellTrie, Payload, PayloadKind};

/// Hard cap on buffered cells. The longest table entries are three cells;
/// the cap only exists so a stream of prefix cells cannot grow the buffer
/// without bound.
const MAX_PENDING_CELLS: usize = 8;

/// Edit to the resolved pending text: remove `retract` characters from
/// the end, then append `insert`. Raw glyphs of unresolved cells are not
/// counted here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Correction {
    pub retract: usize,
    pub insert: String,
}

impl Correction {
    pub fn is_noop(&self) -> bool {
        self.retract == 0 && self.insert.is_empty()
    }

    /// Fold a following delta into this one. A later retraction first
    /// consumes this delta's insert before deepening its retract.
    fn then(&mut self, next: Correction) {
        let kept = self.insert.chars().count();
        if next.retract <= kept {
            let keep = kept - next.retract;
            self.insert = self.insert.chars().take(keep).collect();
        } else {
            self.retract += next.retract - kept;
            self.insert.clear();
        }
        self.insert.push_str(&next.insert);
    }
}

/// Text handed off to the phonetic backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Emitted {
    /// A completed syllable: bopomofo symbols plus its tone mark.
    Syllable(String),
    /// Punctuation or a Greek letter; replaces any half-built syllable.
    Literal(String),
}

/// What a pushed cell did to the composition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub correction: Correction,
    pub forwards: Vec<Emitted>,
}

/// A resolved reading that is part of the current syllable.
#[derive(Debug, Clone)]
struct Unit {
    text: String,
    /// Braille glyphs of the cells this reading came from.
    glyphs: String,
    kind: PayloadKind,
}

/// A complete match that a longer entry may still supersede.
#[derive(Debug, Clone)]
struct Tentative {
    unit: Unit,
    /// Number of buffered cells the match covers.
    depth: usize,
}

#[derive(Debug)]
pub struct BrailleComposer {
    table: CellTrie,
    cells: Vec<Cell>,
    tentative: Option<Tentative>,
    units: Vec<Unit>,
}

impl BrailleComposer {
    pub fn new(table: CellTrie) -> Self {
        Self {
            table,
            cells: Vec::new(),
            tentative: None,
            units: Vec::new(),
        }
    }

    pub fn is_pending(&self) -> bool {
        !self.cells.is_empty() || !self.units.is_empty()
    }

    pub fn reset(&mut self) {
        self.cells.clear();
        self.tentative = None;
        self.units.clear();
    }

    /// Feed one finalized cell. On success the outcome describes how the
    /// resolved pending text changed and which completed text, if any,
    /// should go to the phonetic backend. On error the composition is
    /// left exactly as it was.
    pub fn push(&mut self, cell: Cell) -> Result<Outcome, ComposeError> {
        trace!(cell = %cell.digits(), pending = self.cells.len(), "push cell");
        match self.match_with(&cell) {
            CellMatch::Complete {
                payload,
                extendable,
            } => {
                let payload = payload.clone();
                let retract = self.retract_tentative();
                self.cells.push(cell);
                let unit = self.unit_for(&payload);
                if extendable && self.cells.len() < MAX_PENDING_CELLS {
                    let insert = unit.text.clone();
                    self.tentative = Some(Tentative {
                        unit,
                        depth: self.cells.len(),
                    });
                    Ok(Outcome {
                        correction: Correction { retract, insert },
                        forwards: Vec::new(),
                    })
                } else {
                    self.cells.clear();
                    Ok(self.settle(unit, retract))
                }
            }
            CellMatch::Prefix => {
                if self.cells.len() + 1 >= MAX_PENDING_CELLS {
                    return Err(ComposeError::InvalidCellInContext(
                        cell.digits().to_string(),
                    ));
                }
                self.cells.push(cell);
                Ok(Outcome::default())
            }
            CellMatch::Miss => {
                // A tentative reading that covers the whole buffer can be
                // settled as final, freeing the buffer for the new cell,
                // but only when the cell can actually start a fresh entry.
                let starts_fresh = !matches!(
                    self.table.matches(std::iter::once(&cell)),
                    CellMatch::Miss
                );
                if starts_fresh
                    && let Some(tentative) =
                        self.tentative.take_if(|t| t.depth == self.cells.len())
                {
                    self.cells.clear();
                    debug!(reading = %tentative.unit.text, "settle tentative on miss");
                    // The tentative text is already on screen, so settling
                    // must retract it before its replacement goes out
                    let retract = tentative.unit.text.chars().count();
                    let mut settled = self.settle(tentative.unit, retract);
                    let outcome = self.push(cell)?;
                    settled.correction.then(outcome.correction);
                    settled.forwards.extend(outcome.forwards);
                    return Ok(settled);
                }
                Err(ComposeError::InvalidCellInContext(
                    cell.digits().to_string(),
                ))
            }
        }
    }

    /// Remove the most recent cell, or the most recent resolved reading
    /// when no cells are buffered.
    pub fn erase(&mut self) -> Result<Correction, ComposeError> {
        if self.cells.pop().is_some() {
            if let Some(tentative) =
                self.tentative.take_if(|t| t.depth > self.cells.len())
            {
                let retract = tentative.unit.text.chars().count();
                // The shorter sequence may itself be a complete entry
                return Ok(match self.table.matches(&self.cells) {
                    CellMatch::Complete {
                        payload,
                        extendable: true,
                    } => {
                        let unit = self.unit_for(payload);
                        let insert = unit.text.clone();
                        self.tentative = Some(Tentative {
                            unit,
                            depth: self.cells.len(),
                        });
                        Correction { retract, insert }
                    }
                    _ => Correction {
                        retract,
                        insert: String::new(),
                    },
                });
            }
            return Ok(Correction::default());
        }
        if let Some(unit) = self.units.pop() {
            return Ok(Correction {
                retract: unit.text.chars().count(),
                insert: String::new(),
            });
        }
        Err(ComposeError::NothingToErase)
    }

    /// Pending composition as bopomofo text, with unresolved cells shown
    /// as braille glyphs.
    pub fn display_phonetic(&self) -> String {
        let mut out = String::new();
        for unit in &self.units {
            out.push_str(&unit.text);
        }
        let resolved = match &self.tentative {
            Some(tentative) => {
                out.push_str(&tentative.unit.text);
                tentative.depth
            }
            None => 0,
        };
        for cell in &self.cells[resolved..] {
            out.push(cell.glyph());
        }
        out
    }

    /// Pending composition as the raw braille glyphs that were typed.
    pub fn display_braille(&self) -> String {
        let mut out = String::new();
        for unit in &self.units {
            out.push_str(&unit.glyphs);
        }
        for cell in &self.cells {
            out.push(cell.glyph());
        }
        out
    }

    fn match_with(&self, cell: &Cell) -> CellMatch<'_> {
        self.table
            .matches(self.cells.iter().chain(std::iter::once(cell)))
    }

    fn unit_for(&self, payload: &Payload) -> Unit {
        Unit {
            text: payload.text.clone(),
            glyphs: self.cells.iter().map(Cell::glyph).collect(),
            kind: payload.kind,
        }
    }

    /// Absorb a final reading into the syllable. Phonetic readings stay
    /// in the pending text; tones flush the whole syllable to the
    /// backend and literals replace it, so both leave the pending text
    /// empty.
    fn settle(&mut self, unit: Unit, retract: usize) -> Outcome {
        match unit.kind {
            PayloadKind::Phonetic => {
                let insert = unit.text.clone();
                self.units.push(unit);
                Outcome {
                    correction: Correction { retract, insert },
                    forwards: Vec::new(),
                }
            }
            PayloadKind::Tone => {
                let mut drained = 0;
                let mut syllable = String::new();
                for part in mem::take(&mut self.units) {
                    drained += part.text.chars().count();
                    syllable.push_str(&part.text);
                }
                syllable.push_str(&unit.text);
                debug!(syllable = %syllable, "syllable complete");
                Outcome {
                    correction: Correction {
                        retract: retract + drained,
                        insert: String::new(),
                    },
                    forwards: vec![Emitted::Syllable(syllable)],
                }
            }
            PayloadKind::Literal => {
                let drained: usize = mem::take(&mut self.units)
                    .iter()
                    .map(|part| part.text.chars().count())
                    .sum();
                debug!(text = %unit.text, "literal complete");
                Outcome {
                    correction: Correction {
                        retract: retract + drained,
                        insert: String::new(),
                    },
                    forwards: vec![Emitted::Literal(unit.text)],
                }
            }
        }
    }

    fn retract_tentative(&mut self) -> usize {
        match self.tentative.take() {
            Some(tentative) => tentative.unit.text.chars().count(),
            None => 0,
        }
    }
}
