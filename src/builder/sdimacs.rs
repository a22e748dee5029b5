/*!
Reading formulas in the SSAT format.

The format extends DIMACS with quantifier blocks:

```text
c a comment
p cnf 4 2
r 0.5 1 2 0
e 3 0
r 0.25 4 0
1 3 0
-2 -3 4 0
```

- `r <p> <atoms> 0` binds each atom to be true with probability `p`.
- `e <atoms> 0` and `a <atoms> 0` bind atoms existentially and universally.
- Consecutive blocks of the same kind are a single level of the prefix.
- Clauses are signed atoms terminated by `0`.

The problem specification is advisory, and a mismatch with the formula read is noted with a warning.
*/

use std::io::BufRead;

use crate::{
    builder::ParserInfo,
    context::GenericContext,
    misc::log::targets,
    oracle::SatOracle,
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::CClause,
        literal::{CLiteral, Literal},
        quantifier::Quantifier,
    },
    types::err::{self, ParseError},
};

impl<O: SatOracle + Default> GenericContext<O> {
    /// Reads an SSAT formula into the context.
    ///
    /// ```rust
    /// # use otter_ssat::context::Context;
    /// # use otter_ssat::config::Config;
    /// # use std::io::Write;
    /// let mut the_context = Context::from_config(Config::default());
    ///
    /// let mut sdimacs = vec![];
    /// let _ = sdimacs.write(b"
    /// p cnf 2 2
    /// r 0.5 1 0
    /// e 2 0
    ///  1  2 0
    /// -1 -2 0
    /// ");
    ///
    /// let info = the_context.read_sdimacs(sdimacs.as_slice());
    /// assert!(info.is_ok_and(|info| info.added_clauses == 2));
    /// assert_eq!(the_context.prefix.level_count(), 2);
    /// ```
    pub fn read_sdimacs(&mut self, mut reader: impl BufRead) -> Result<ParserInfo, err::ErrorKind> {
        let mut info = ParserInfo::default();
        let mut buffer = String::with_capacity(1024);
        let mut clause_buffer: CClause = Vec::default();
        let mut line_counter = 0;

        'formula_loop: loop {
            buffer.clear();
            match reader.read_line(&mut buffer) {
                Ok(0) => break,
                Ok(_) => line_counter += 1,
                Err(_) => return Err(err::ErrorKind::from(ParseError::Line(line_counter + 1))),
            }

            let line = buffer.trim_start();
            let Some(first) = line.chars().next() else {
                continue;
            };

            match first {
                'c' => continue,

                '%' => break 'formula_loop,

                'p' => {
                    let (atoms, clauses) = read_problem_specification(line, line_counter)?;
                    info.expected_atoms = Some(atoms);
                    info.expected_clauses = Some(clauses);
                }

                'r' | 'e' | 'a' => {
                    let mut tokens = line.split_whitespace().skip(1);

                    let quantifier = match first {
                        'r' => {
                            let probability = tokens
                                .next()
                                .and_then(|token| token.parse::<f64>().ok())
                                .filter(|p| (0.0..=1.0).contains(p))
                                .ok_or(ParseError::Probability(line_counter))?;
                            Quantifier::Random(probability)
                        }
                        'e' => Quantifier::Exist,
                        _ => Quantifier::Forall,
                    };

                    let atoms = read_block(tokens, line_counter)?;
                    for (index, atom) in atoms.iter().enumerate() {
                        if self.prefix.quantifier(*atom).is_some() || atoms[..index].contains(atom) {
                            return Err(err::ErrorKind::from(ParseError::Requantified {
                                line: line_counter,
                                atom: *atom,
                            }));
                        }
                    }

                    log::trace!(target: targets::PARSER, "Line {line_counter}: {quantifier:?} {atoms:?}");
                    info.quantified_atoms += atoms.len();
                    self.quantify(quantifier, &atoms)?;
                }

                '-' | '0'..='9' => {
                    for token in line.split_whitespace() {
                        match token {
                            "0" => {
                                let the_clause = std::mem::take(&mut clause_buffer);
                                self.add_clause(the_clause)?;
                                info.added_clauses += 1;
                            }

                            _ => {
                                let literal = token
                                    .parse::<isize>()
                                    .ok()
                                    .and_then(|int| CLiteral::try_from(int).ok())
                                    .ok_or(ParseError::Literal(line_counter))?;
                                clause_buffer.push(literal);
                            }
                        }
                    }

                    if !clause_buffer.is_empty() {
                        return Err(err::ErrorKind::from(ParseError::UnterminatedClause(
                            line_counter,
                        )));
                    }
                }

                character => {
                    return Err(err::ErrorKind::from(ParseError::UnexpectedCharacter {
                        line: line_counter,
                        character,
                    }))
                }
            }
        }

        info.added_atoms = self.atom_count();

        if let Some(expected) = info.expected_atoms {
            if expected != info.added_atoms {
                log::warn!(target: targets::PARSER, "Expected {expected} atoms, read {}", info.added_atoms);
            }
        }
        if let Some(expected) = info.expected_clauses {
            if expected != info.added_clauses {
                log::warn!(target: targets::PARSER, "Expected {expected} clauses, read {}", info.added_clauses);
            }
        }

        log::info!(target: targets::PARSER, "Read {} clauses over {} atoms, with {} levels", info.added_clauses, info.added_atoms, self.prefix.level_count());

        Ok(info)
    }
}

/// The atom and clause counts of a problem specification line.
fn read_problem_specification(line: &str, line_counter: usize) -> Result<(usize, usize), ParseError> {
    let mut details = line.split_whitespace();

    if details.next() != Some("p") || details.next() != Some("cnf") {
        return Err(ParseError::ProblemSpecification(line_counter));
    }

    let mut count = || {
        details
            .next()
            .and_then(|token| token.parse::<usize>().ok())
            .ok_or(ParseError::ProblemSpecification(line_counter))
    };

    let atoms = count()?;
    let clauses = count()?;
    Ok((atoms, clauses))
}

/// The atoms of a quantifier block, from the tokens following the quantifier (and probability).
fn read_block<'t>(
    tokens: impl Iterator<Item = &'t str>,
    line_counter: usize,
) -> Result<Vec<Atom>, ParseError> {
    let mut atoms = Vec::default();
    let mut terminated = false;

    for token in tokens {
        if terminated {
            return Err(ParseError::Literal(line_counter));
        }
        match token {
            "0" => terminated = true,
            _ => match token.parse::<Atom>() {
                Ok(atom) if atom > 0 && atom <= ATOM_MAX => atoms.push(atom),
                _ => return Err(ParseError::Literal(line_counter)),
            },
        }
    }

    match terminated {
        true => Ok(atoms),
        false => Err(ParseError::UnterminatedPrefix(line_counter)),
    }
}
