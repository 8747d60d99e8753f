use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use thiserror::Error;

use crate::Amount;
use crate::model::{Category, Operation, Pot, PotId};

/// Errors that can occur when parsing csv rows
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: unrecognized operation '{op}'")]
    UnrecognizedOp { line: usize, op: String },

    #[error("line {line}: unrecognized category '{category}'")]
    UnrecognizedCategory { line: usize, category: String },

    #[error("line {line}: {op} missing {field}")]
    MissingField {
        line: usize,
        op: String,
        field: &'static str,
    },

    #[error("line {line}: amount '{value}' is not a finite number")]
    BadAmount { line: usize, value: f64 },
}

#[derive(Debug, Deserialize)]
struct InputRow {
    op: String,
    pot: Option<PotId>,
    name: Option<String>,
    category: Option<String>,
    amount: Option<f64>,
}

#[derive(Debug, Serialize)]
struct OutputRow {
    pot: PotId,
    name: String,
    category: &'static str,
    balance: String,
    goal: String,
    goal_reached: bool,
}

fn require<T>(value: Option<T>, line: usize, op: &str, field: &'static str) -> Result<T, CsvError> {
    value.ok_or_else(|| CsvError::MissingField {
        line,
        op: op.to_string(),
        field,
    })
}

fn parse_amount(value: Option<f64>, line: usize, op: &str) -> Result<Amount, CsvError> {
    let value = require(value, line, op, "amount")?;
    Amount::try_from_float(value).ok_or(CsvError::BadAmount { line, value })
}

/// Read ledger operations from a csv file
pub fn read_operations(
    path: impl AsRef<Path>,
) -> impl Iterator<Item = Result<Operation, CsvError>> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .expect("failed to open csv file");

    reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            match row.op.as_str() {
                "create" => {
                    let name = require(row.name, line, "create", "name")?;
                    let category = require(row.category, line, "create", "category")?;
                    let category: Category =
                        category
                            .parse()
                            .map_err(|_| CsvError::UnrecognizedCategory { line, category })?;
                    Ok(Operation::Create { name, category })
                }
                "deposit" => Ok(Operation::Deposit {
                    pot: require(row.pot, line, "deposit", "pot")?,
                    amount: parse_amount(row.amount, line, "deposit")?,
                }),
                "withdraw" => Ok(Operation::Withdraw {
                    pot: require(row.pot, line, "withdraw", "pot")?,
                    amount: parse_amount(row.amount, line, "withdraw")?,
                }),
                "set_goal" => Ok(Operation::SetGoal {
                    pot: require(row.pot, line, "set_goal", "pot")?,
                    target: parse_amount(row.amount, line, "set_goal")?,
                }),
                "rename" => Ok(Operation::Rename {
                    pot: require(row.pot, line, "rename", "pot")?,
                    name: require(row.name, line, "rename", "name")?,
                }),
                "delete" => Ok(Operation::Delete {
                    pot: require(row.pot, line, "delete", "pot")?,
                }),
                other => Err(CsvError::UnrecognizedOp {
                    line,
                    op: other.to_string(),
                }),
            }
        })
}

/// write pot snapshots to stdout in csv format
pub fn write_pots<'a>(pots: impl IntoIterator<Item = &'a Pot>) {
    let stdout = io::stdout();
    let mut writer = csv::Writer::from_writer(stdout.lock());

    for pot in pots {
        let (goal, goal_reached) = match &pot.goal {
            Some(goal) => (goal.target.to_string(), goal.notified),
            None => (String::new(), false),
        };
        let row = OutputRow {
            pot: pot.id,
            name: pot.name.clone(),
            category: pot.category.as_str(),
            balance: pot.balance.to_string(),
            goal,
            goal_reached,
        };
        writer.serialize(&row).expect("failed to write csv row");
    }

    writer.flush().expect("failed to flush csv writer");
}
