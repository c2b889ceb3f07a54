use std::io::{BufRead, Cursor};
use std::rc::Rc;
use std::str::FromStr;

use crate::core::{
    BOARD, ENEMY_ID, GRID_HEIGHT, GRID_WIDTH, GameState, Grid, Item, MY_ID, Player, Position, Tile, Turn,
    TurnKind,
};
use crate::error::ParseError;

struct TurnReader<'r, R> {
    reader: &'r mut R,
    line_number: usize,
}

impl<'r, R: BufRead> TurnReader<'r, R> {
    fn new(reader: &'r mut R) -> Self {
        TurnReader { reader, line_number: 0 }
    }

    /// Next non blank line, `None` at end of input.
    fn try_next_line(&mut self) -> Result<Option<String>, ParseError> {
        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            let line = line.trim();
            if !line.is_empty() {
                return Ok(Some(line.to_string()));
            }
        }
    }

    fn next_fields(&mut self, expected: &'static str) -> Result<Vec<String>, ParseError> {
        match self.try_next_line()? {
            Some(line) => Ok(line.split_whitespace().map(str::to_string).collect()),
            None => Err(ParseError::MissingField {
                line: self.line_number + 1,
                expected,
            }),
        }
    }

    fn field<'f>(&self, fields: &'f [String], index: usize, expected: &'static str) -> Result<&'f str, ParseError> {
        fields
            .get(index)
            .map(String::as_str)
            .ok_or(ParseError::MissingField {
                line: self.line_number,
                expected,
            })
    }

    fn number<T: FromStr>(&self, fields: &[String], index: usize, expected: &'static str) -> Result<T, ParseError> {
        let value = self.field(fields, index, expected)?;
        value.parse().map_err(|_| ParseError::InvalidNumber {
            line: self.line_number,
            value: value.to_string(),
        })
    }

    fn read_grid(&mut self) -> Result<Grid, ParseError> {
        let mut grid = Grid::new();
        for y in 0..GRID_HEIGHT {
            let fields = self.next_fields("a row of 7 tiles")?;
            for x in 0..GRID_WIDTH {
                let tile: Tile = self.field(&fields, x as usize, "a row of 7 tiles")?.parse()?;
                grid.add_tile(Position::new(x, y), tile);
            }
        }
        Ok(grid)
    }

    fn read_player(&mut self, id: usize) -> Result<Player, ParseError> {
        let fields = self.next_fields("a player line")?;
        Ok(Player {
            id,
            quest_cards: self.number(&fields, 0, "a quest card count")?,
            position: Position::new(
                self.number(&fields, 1, "a player x")?,
                self.number(&fields, 2, "a player y")?,
            ),
            tile: self.field(&fields, 3, "a held tile")?.parse()?,
        })
    }

    fn read_items(&mut self) -> Result<Vec<Item>, ParseError> {
        let count: usize = {
            let fields = self.next_fields("an item count")?;
            self.number(&fields, 0, "an item count")?
        };
        let mut items = Vec::with_capacity(count);
        for _ in 0..count {
            let fields = self.next_fields("an item line")?;
            items.push(Item {
                name: Rc::from(self.field(&fields, 0, "an item name")?),
                position: Position::new(
                    self.number(&fields, 1, "an item x")?,
                    self.number(&fields, 2, "an item y")?,
                ),
                owner: self.number(&fields, 3, "an item owner")?,
                in_quest: false,
            });
        }
        Ok(items)
    }

    fn read_quests(&mut self, items: &mut [Item]) -> Result<(), ParseError> {
        let count: usize = {
            let fields = self.next_fields("a quest count")?;
            self.number(&fields, 0, "a quest count")?
        };
        for _ in 0..count {
            let fields = self.next_fields("a quest line")?;
            let name = self.field(&fields, 0, "a quest item name")?;
            let owner: usize = self.number(&fields, 1, "a quest owner")?;
            let item = items
                .iter_mut()
                .find(|item| &*item.name == name && item.owner == owner)
                .ok_or_else(|| ParseError::UnknownQuest {
                    name: name.to_string(),
                    owner,
                })?;
            item.in_quest = true;
        }
        Ok(())
    }
}

/// Reads one turn. Returns [`ParseError::EndOfInput`] when the input ends
/// cleanly between turns.
pub fn parse_turn<R: BufRead>(reader: &mut R) -> Result<Turn, ParseError> {
    let mut turn_reader = TurnReader::new(reader);

    let Some(flag) = turn_reader.try_next_line()? else {
        return Err(ParseError::EndOfInput);
    };
    let flag: i32 = flag.parse().map_err(|_| ParseError::InvalidNumber {
        line: turn_reader.line_number,
        value: flag.clone(),
    })?;
    let kind = if flag == 0 { TurnKind::Push } else { TurnKind::Move };

    let grid = turn_reader.read_grid()?;
    let me = turn_reader.read_player(MY_ID)?;
    let enemy = turn_reader.read_player(ENEMY_ID)?;
    let mut items = turn_reader.read_items()?;
    turn_reader.read_quests(&mut items)?;

    Ok(Turn {
        kind,
        state: GameState::new(grid, me, enemy, items),
    })
}

/// Parses 7 lines of 7 tile codes, the grid part of a turn.
pub fn parse_grid(text: &str) -> Result<Grid, ParseError> {
    let mut cursor = Cursor::new(text.as_bytes());
    TurnReader::new(&mut cursor).read_grid()
}

pub fn render_grid_to_string(grid: &Grid) -> String {
    let mut result = String::new();
    for y in 0..GRID_HEIGHT {
        let row: Vec<String> = (0..GRID_WIDTH)
            .map(|x| grid.tile(Position::new(x, y)).to_string())
            .collect();
        result.push_str(&row.join(" "));
        result.push('\n');
    }
    result
}

pub fn render_symbols<F>(get_char: F) -> String
where
    F: Fn(&Position) -> char,
{
    let mut result = String::new();
    for y in 0..BOARD.height {
        for x in 0..BOARD.width {
            result.push(get_char(&Position::new(x, y)));
        }
        result.push('\n');
    }
    result
}

pub fn render_where_present(positions: &[Position], present: char, absent: char) -> String {
    render_symbols(|pos| if positions.contains(pos) { present } else { absent })
}

/// Piece map: `@` us, `&` opponent (`%` both), item names' first letter,
/// lowercase for ours and uppercase for theirs, `.` empty.
pub fn render_pieces_to_string(game: &GameState) -> String {
    render_symbols(|pos| {
        let me = game.me.position == *pos;
        let enemy = game.enemy.position == *pos;
        match (me, enemy) {
            (true, true) => return '%',
            (true, false) => return '@',
            (false, true) => return '&',
            _ => {}
        }
        game.items
            .iter()
            .find(|item| item.position == *pos)
            .and_then(|item| item.name.chars().next().map(|c| (c, item.owner)))
            .map(|(c, owner)| {
                if owner == MY_ID {
                    c.to_ascii_lowercase()
                } else {
                    c.to_ascii_uppercase()
                }
            })
            .unwrap_or('.')
    })
}
