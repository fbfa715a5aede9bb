//! Built statements and batch outcomes.

use std::fmt;

use super::value::Value;

/// SQL text plus positional arguments, in placeholder order.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    args: Vec<Value>,
}

impl Statement {
    pub fn new(sql: String, args: Vec<Value>) -> Self {
        Self { sql, args }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Number of `?` placeholders. A `?` inside a quoted identifier or
    /// string literal (`"..."`, `'...'`, `` `...` ``, `[...]`) is not one.
    pub fn placeholder_count(&self) -> usize {
        let mut count = 0;
        let mut close: Option<char> = None;
        for c in self.sql.chars() {
            match close {
                Some(end) if c == end => close = None,
                Some(_) => {}
                None => match c {
                    '?' => count += 1,
                    '"' | '\'' | '`' => close = Some(c),
                    '[' => close = Some(']'),
                    _ => {}
                },
            }
        }
        count
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- [", self.sql)?;
        for (i, a) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{a}")?;
        }
        f.write_str("]")
    }
}

/// Outcome of a batch insert.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchResult {
    /// Items processed, skipped ones included.
    pub attempted: usize,
    /// Rows written.
    pub inserted: usize,
    /// 1-based positions of items rejected by column validation, ascending.
    pub skipped: Vec<usize>,
    /// The last statement that was built and executed. Diagnostic only.
    pub last_statement: Option<Statement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_count_skips_quoted_question_marks() {
        let stmt = Statement::new(
            r#"SELECT "why?" FROM [odd?table] WHERE (id==? OR id==?)"#.to_string(),
            vec![Value::Integer(1), Value::Integer(2)],
        );
        assert_eq!(stmt.placeholder_count(), 2);
    }

    #[test]
    fn placeholder_count_plain_insert() {
        let stmt = Statement::new("INSERT INTO t(a, b) VALUES (?, ?)".to_string(), Vec::new());
        assert_eq!(stmt.placeholder_count(), 2);
    }
}
