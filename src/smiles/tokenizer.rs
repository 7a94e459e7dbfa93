use tracing::warn;

use crate::atom::Span;
use crate::bond::BondOrder;
use crate::config::AtomPolicy;
use crate::element::Element;
use crate::smiles::error::SmilesError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Atom(AtomToken),
    Bond {
        order: BondOrder,
        pos: usize,
    },
    RingClosure {
        bond: Option<BondOrder>,
        label: u16,
        pos: usize,
    },
    OpenParen(usize),
    CloseParen(usize),
    Dot(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomToken {
    pub element: Element,
    pub is_aromatic: bool,
    /// `Some` only for bracket atoms.
    pub hcount: Option<u8>,
    pub charge: i8,
    pub is_bracket: bool,
    pub span: Span,
}

pub fn tokenize(input: &str, policy: AtomPolicy) -> Result<Vec<Token>, SmilesError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '[' => {
                let (tok, next) = parse_bracket_atom(&chars, i, policy)?;
                tokens.push(Token::Atom(tok));
                i = next;
            }
            'B' => {
                if chars.get(i + 1) == Some(&'r') {
                    tokens.push(Token::Atom(bare_atom(Element::Br, false, i, 2)));
                    i += 2;
                } else {
                    tokens.push(Token::Atom(bare_atom(Element::B, false, i, 1)));
                    i += 1;
                }
            }
            'C' => {
                if chars.get(i + 1) == Some(&'l') {
                    tokens.push(Token::Atom(bare_atom(Element::Cl, false, i, 2)));
                    i += 2;
                } else {
                    tokens.push(Token::Atom(bare_atom(Element::C, false, i, 1)));
                    i += 1;
                }
            }
            ch @ ('N' | 'O' | 'P' | 'S' | 'F' | 'I') => {
                let element = Element::from_symbol(&ch.to_string()).unwrap_or(Element::Other);
                tokens.push(Token::Atom(bare_atom(element, false, i, 1)));
                i += 1;
            }
            ch @ ('b' | 'c' | 'n' | 'o' | 'p' | 's') => {
                let upper = ch.to_ascii_uppercase().to_string();
                let element = Element::from_symbol(&upper).unwrap_or(Element::Other);
                tokens.push(Token::Atom(bare_atom(element, true, i, 1)));
                i += 1;
            }
            ch if ch == '*' || ch.is_ascii_alphabetic() => {
                unrecognized(policy, i, &ch.to_string())?;
                tokens.push(Token::Atom(bare_atom(Element::Other, false, i, 1)));
                i += 1;
            }
            '-' | '/' | '\\' => {
                tokens.push(Token::Bond {
                    order: BondOrder::Single,
                    pos: i,
                });
                i += 1;
            }
            '=' => {
                tokens.push(Token::Bond {
                    order: BondOrder::Double,
                    pos: i,
                });
                i += 1;
            }
            '#' => {
                tokens.push(Token::Bond {
                    order: BondOrder::Triple,
                    pos: i,
                });
                i += 1;
            }
            ':' => {
                tokens.push(Token::Bond {
                    order: BondOrder::Aromatic,
                    pos: i,
                });
                i += 1;
            }
            '(' => {
                tokens.push(Token::OpenParen(i));
                i += 1;
            }
            ')' => {
                tokens.push(Token::CloseParen(i));
                i += 1;
            }
            '.' => {
                tokens.push(Token::Dot(i));
                i += 1;
            }
            '%' => {
                let (label, next) = parse_percent_label(&chars, i)?;
                let bond = try_consume_pending_bond(&mut tokens);
                tokens.push(Token::RingClosure { bond, label, pos: i });
                i = next;
            }
            d @ '0'..='9' => {
                let bond = try_consume_pending_bond(&mut tokens);
                tokens.push(Token::RingClosure {
                    bond,
                    label: (d as u16) - b'0' as u16,
                    pos: i,
                });
                i += 1;
            }
            ch => return Err(SmilesError::UnexpectedChar { pos: i, ch }),
        }
    }

    Ok(tokens)
}

fn bare_atom(element: Element, aromatic: bool, pos: usize, len: usize) -> AtomToken {
    AtomToken {
        element,
        is_aromatic: aromatic,
        hcount: None,
        charge: 0,
        is_bracket: false,
        span: Span {
            start: pos,
            end: pos + len,
        },
    }
}

fn unrecognized(policy: AtomPolicy, pos: usize, text: &str) -> Result<(), SmilesError> {
    match policy {
        AtomPolicy::Strict => Err(SmilesError::UnrecognizedAtom {
            pos,
            text: text.to_string(),
        }),
        AtomPolicy::Lenient => {
            warn!(pos, text, "unrecognized atom kept as generic heteroatom");
            Ok(())
        }
    }
}

fn try_consume_pending_bond(tokens: &mut Vec<Token>) -> Option<BondOrder> {
    if let Some(Token::Bond { .. }) = tokens.last() {
        if let Some(Token::Bond { order, .. }) = tokens.pop() {
            return Some(order);
        }
    }
    None
}

fn parse_percent_label(chars: &[char], start: usize) -> Result<(u16, usize), SmilesError> {
    let i = start + 1;
    if i + 1 >= chars.len() || !chars[i].is_ascii_digit() || !chars[i + 1].is_ascii_digit() {
        return Err(SmilesError::UnexpectedChar {
            pos: start,
            ch: '%',
        });
    }
    let d1 = (chars[i] as u16) - b'0' as u16;
    let d2 = (chars[i + 1] as u16) - b'0' as u16;
    Ok((d1 * 10 + d2, i + 2))
}

fn parse_bracket_atom(
    chars: &[char],
    start: usize,
    policy: AtomPolicy,
) -> Result<(AtomToken, usize), SmilesError> {
    let mut i = start + 1; // skip '['

    skip_digits(chars, &mut i); // isotope

    let (element, is_aromatic) = parse_bracket_element(chars, &mut i, start, policy)?;

    while i < chars.len() && chars[i] == '@' {
        i += 1;
    }

    let hcount = parse_hcount(chars, &mut i);
    let charge = parse_charge(chars, &mut i, start)?;

    if i < chars.len() && chars[i] == ':' {
        i += 1;
        skip_digits(chars, &mut i); // atom class
    }

    if i >= chars.len() || chars[i] != ']' {
        return Err(SmilesError::UnclosedBracketAtom { pos: start });
    }
    i += 1; // skip ']'

    Ok((
        AtomToken {
            element,
            is_aromatic,
            hcount: Some(hcount.unwrap_or(0)),
            charge,
            is_bracket: true,
            span: Span { start, end: i },
        },
        i,
    ))
}

fn skip_digits(chars: &[char], i: &mut usize) {
    while *i < chars.len() && chars[*i].is_ascii_digit() {
        *i += 1;
    }
}

fn parse_bracket_element(
    chars: &[char],
    i: &mut usize,
    bracket_start: usize,
    policy: AtomPolicy,
) -> Result<(Element, bool), SmilesError> {
    if *i >= chars.len() {
        return Err(SmilesError::UnclosedBracketAtom { pos: bracket_start });
    }

    let aromatic_map: &[(&str, Element)] = &[
        ("se", Element::Se),
        ("b", Element::B),
        ("c", Element::C),
        ("n", Element::N),
        ("o", Element::O),
        ("p", Element::P),
        ("s", Element::S),
    ];

    for &(pat, elem) in aromatic_map {
        if *i + pat.len() <= chars.len() {
            let slice: String = chars[*i..*i + pat.len()].iter().collect();
            if slice == pat {
                *i += pat.len();
                return Ok((elem, true));
            }
        }
    }

    let sym_start = *i;
    let sym_len = if chars[*i] == '*' {
        1
    } else if chars[*i].is_ascii_uppercase() {
        // A lowercase follower always belongs to the symbol: `[Co]` is
        // cobalt, never carbon followed by junk.
        if *i + 1 < chars.len() && chars[*i + 1].is_ascii_lowercase() {
            2
        } else {
            1
        }
    } else {
        return Err(SmilesError::UnexpectedChar {
            pos: *i,
            ch: chars[*i],
        });
    };
    *i += sym_len;

    let sym: String = chars[sym_start..*i].iter().collect();
    if let Some(e) = Element::from_symbol(&sym) {
        return Ok((e, false));
    }
    unrecognized(policy, sym_start, &sym)?;
    Ok((Element::Other, false))
}

fn parse_hcount(chars: &[char], i: &mut usize) -> Option<u8> {
    if *i < chars.len() && chars[*i] == 'H' {
        *i += 1;
        let mut count: u8 = 1;
        if *i < chars.len() && chars[*i].is_ascii_digit() {
            count = chars[*i] as u8 - b'0';
            *i += 1;
        }
        Some(count)
    } else {
        None
    }
}

fn parse_charge(chars: &[char], i: &mut usize, bracket_start: usize) -> Result<i8, SmilesError> {
    let sign: i8 = match chars.get(*i) {
        Some('+') => 1,
        Some('-') => -1,
        _ => return Ok(0),
    };
    let symbol = chars[*i];
    *i += 1;

    if *i < chars.len() && chars[*i] == symbol {
        let mut count: i8 = 1;
        while *i < chars.len() && chars[*i] == symbol {
            count = count
                .checked_add(1)
                .ok_or(SmilesError::UnclosedBracketAtom { pos: bracket_start })?;
            *i += 1;
        }
        Ok(sign * count)
    } else if *i < chars.len() && chars[*i].is_ascii_digit() {
        let mut val: i8 = 0;
        while *i < chars.len() && chars[*i].is_ascii_digit() {
            val = val
                .checked_mul(10)
                .and_then(|v| v.checked_add((chars[*i] as i8) - b'0' as i8))
                .ok_or(SmilesError::UnclosedBracketAtom { pos: bracket_start })?;
            *i += 1;
        }
        Ok(sign * val)
    } else {
        Ok(sign)
    }
}
