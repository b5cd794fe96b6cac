//! Parser for chain-description lines.

use log::warn;

use crate::error::{Result, SkemaError};
use crate::geometry::Direction;
use crate::graph::{ElementType, Value};

use super::ast::ChainLine;

/// Parse a chain description into its element lines.
///
/// Empty lines are skipped. Each remaining line is
/// `"<Name> <startNum> <endNum>[ <value>][; <direction>][; <value>]"`;
/// the value is accepted either as a fourth whitespace token or as a
/// trailing `;`-separated segment.
pub fn parse_chain(input: &str) -> Result<Vec<ChainLine>> {
    let mut lines = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        lines.push(parse_line(trimmed, line_no)?);
    }
    Ok(lines)
}

fn parse_line(line: &str, line_no: usize) -> Result<ChainLine> {
    let mut segments = line.split(';').map(str::trim);

    let head = segments.next().unwrap_or("");
    let tokens: Vec<&str> = head.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(SkemaError::parse(
            line_no,
            format!("expected '<name> <start> <end>', got '{}'", head),
        ));
    }

    let name = tokens[0].to_string();
    let element_type = ElementType::from_code(&name).unwrap_or_else(|| {
        warn!("line {}: unknown element code '{}', treating as wire", line_no, name);
        ElementType::Wire
    });

    let start_label = parse_label(tokens[1], line_no)?;
    let end_label = parse_label(tokens[2], line_no)?;

    let mut direction = None;
    let mut value_token: Option<String> = None;

    // Optional 4th whitespace token: the value.
    match tokens.len() {
        3 => {}
        4 => value_token = Some(tokens[3].to_string()),
        _ => {
            return Err(SkemaError::parse(
                line_no,
                format!("too many tokens before ';' in '{}'", head),
            ));
        }
    }

    for segment in segments {
        if segment.is_empty() {
            continue;
        }
        if direction.is_none() {
            if let Some(dir) = Direction::from_keyword(segment) {
                direction = Some(dir);
                continue;
            }
        }
        if value_token.is_none() {
            value_token = Some(segment.to_string());
        } else {
            return Err(SkemaError::parse(
                line_no,
                format!("unexpected trailing segment '{}'", segment),
            ));
        }
    }

    let (value, is_open) = decode_value(value_token, element_type);

    Ok(ChainLine {
        name,
        element_type,
        start_label,
        end_label,
        direction,
        value,
        is_open,
        line: line_no,
    })
}

fn parse_label(token: &str, line_no: usize) -> Result<u32> {
    token
        .parse()
        .map_err(|_| SkemaError::parse(line_no, format!("invalid node label '{}'", token)))
}

/// Decode a value token. Switch lines use `no`/`nc` for state instead of a
/// numeric value; anything non-numeric elsewhere is a symbolic expression.
fn decode_value(token: Option<String>, element_type: ElementType) -> (Option<Value>, Option<bool>) {
    let Some(token) = token else {
        return (None, None);
    };
    if element_type == ElementType::Switch {
        match token.to_ascii_lowercase().as_str() {
            "no" => return (None, Some(true)),
            "nc" => return (None, Some(false)),
            _ => {}
        }
    }
    match token.parse::<f64>() {
        Ok(n) => (Some(Value::Number(n)), None),
        Err(_) => (Some(Value::Expr(token)), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_line() {
        let lines = parse_chain("R1 0 1").unwrap();
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert_eq!(line.name, "R1");
        assert_eq!(line.element_type, ElementType::Resistor);
        assert_eq!((line.start_label, line.end_label), (0, 1));
        assert_eq!(line.direction, None);
        assert_eq!(line.value, None);
    }

    #[test]
    fn test_parse_direction_and_value_segments() {
        let lines = parse_chain("C1 1 2; down; 10").unwrap();
        let line = &lines[0];
        assert_eq!(line.element_type, ElementType::Capacitor);
        assert_eq!(line.direction, Some(Direction::Down));
        assert_eq!(line.value, Some(Value::Number(10.0)));
    }

    #[test]
    fn test_parse_value_as_fourth_token() {
        let lines = parse_chain("V1 0 1 5; up").unwrap();
        let line = &lines[0];
        assert_eq!(line.value, Some(Value::Number(5.0)));
        assert_eq!(line.direction, Some(Direction::Up));
    }

    #[test]
    fn test_parse_symbolic_value() {
        let lines = parse_chain("L1 0 1; left; j5").unwrap();
        assert_eq!(lines[0].value, Some(Value::Expr("j5".into())));
    }

    #[test]
    fn test_parse_switch_state_tokens() {
        let lines = parse_chain("SW1 0 1 no\nSW2 1 2 nc").unwrap();
        assert_eq!(lines[0].is_open, Some(true));
        assert_eq!(lines[1].is_open, Some(false));
        assert_eq!(lines[0].value, None);
    }

    #[test]
    fn test_unknown_code_defaults_to_wire() {
        let lines = parse_chain("X1 0 1").unwrap();
        assert_eq!(lines[0].element_type, ElementType::Wire);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let lines = parse_chain("\nR1 0 1\n\nC1 1 2\n").unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].line, 4);
    }

    #[test]
    fn test_short_line_errors() {
        let err = parse_chain("R1 0").unwrap_err();
        assert!(matches!(err, SkemaError::ParseError { line: 1, .. }));
    }

    #[test]
    fn test_bad_label_errors() {
        let err = parse_chain("R1 zero 1").unwrap_err();
        assert!(matches!(err, SkemaError::ParseError { .. }));
    }
}
