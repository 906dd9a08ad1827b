// Batch Case Runner
// Reads arithmetic and RSA cases from text files and checks each result
//
// One case per line, `#` starts a comment:
//   add a b sum          sub a b difference     mul a b product
//   div a b quotient remainder
//   encrypt n e message ciphertext              decrypt n d ciphertext message

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{info, warn};
use thiserror::Error;

use crate::bigint::BigInteger;
use crate::rsa::{decrypt, encrypt, RsaError};

/// Errors that stop a batch before any case runs
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },
}

/// Result type for batch operations
pub type BatchResult<T> = Result<T, BatchError>;

/// Why a single case could not produce a value
#[derive(Debug, Error)]
enum CaseError {
    #[error("{operation} takes {expected} inputs, found {found}")]
    Arity {
        operation: Operation,
        expected: usize,
        found: usize,
    },

    #[error(transparent)]
    Rsa(#[from] RsaError),
}

/// Configuration for a batch run
#[derive(Clone, Debug, Default)]
pub struct BatchConfig {
    /// Stop at the first failing case
    pub fail_fast: bool,
}

impl BatchConfig {
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Encrypt,
    Decrypt,
}

impl Operation {
    fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "add" => Some(Operation::Add),
            "sub" => Some(Operation::Sub),
            "mul" => Some(Operation::Mul),
            "div" => Some(Operation::Div),
            "encrypt" => Some(Operation::Encrypt),
            "decrypt" => Some(Operation::Decrypt),
            _ => None,
        }
    }

    /// Number of (inputs, expected outputs)
    fn arity(self) -> (usize, usize) {
        match self {
            Operation::Add | Operation::Sub | Operation::Mul => (2, 1),
            Operation::Div => (2, 2),
            Operation::Encrypt | Operation::Decrypt => (3, 1),
        }
    }

    fn evaluate(self, inputs: &[BigInteger]) -> Result<Vec<BigInteger>, CaseError> {
        let (expected, _) = self.arity();
        if inputs.len() != expected {
            return Err(CaseError::Arity {
                operation: self,
                expected,
                found: inputs.len(),
            });
        }

        let result = match self {
            Operation::Add => vec![inputs[0].add(&inputs[1])],
            Operation::Sub => vec![inputs[0].subtract(&inputs[1])],
            Operation::Mul => vec![inputs[0].multiply(&inputs[1])],
            Operation::Div => {
                let (quotient, remainder) = inputs[0].divide(&inputs[1]).map_err(RsaError::from)?;
                vec![quotient, remainder]
            }
            Operation::Encrypt => vec![encrypt(&inputs[0], &inputs[1], &inputs[2])?],
            Operation::Decrypt => vec![decrypt(&inputs[0], &inputs[1], &inputs[2])?],
        };
        Ok(result)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Operation::Add => "add",
            Operation::Sub => "sub",
            Operation::Mul => "mul",
            Operation::Div => "div",
            Operation::Encrypt => "encrypt",
            Operation::Decrypt => "decrypt",
        };
        f.write_str(keyword)
    }
}

/// A single parsed case
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Case {
    pub line: usize,
    pub operation: Operation,
    pub inputs: Vec<BigInteger>,
    pub expected: Vec<BigInteger>,
}

/// A case whose result did not match
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseFailure {
    pub line: usize,
    pub operation: Operation,
    pub expected: String,
    pub actual: String,
}

/// Outcome of a batch run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub passed: usize,
    pub failures: Vec<CaseFailure>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn total(&self) -> usize {
        self.passed + self.failures.len()
    }
}

fn join(values: &[BigInteger]) -> String {
    values.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}

/// Parse every case from a reader
pub fn parse_cases<R: BufRead>(reader: R) -> BatchResult<Vec<Case>> {
    let mut cases = Vec::new();

    for (index, text) in reader.lines().enumerate() {
        let text = text?;
        let line = index + 1;
        let content = text.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let mut fields = content.split_whitespace();
        let keyword = fields.next().unwrap_or("");
        let operation = Operation::from_keyword(keyword).ok_or_else(|| BatchError::Syntax {
            line,
            message: format!("unknown operation {:?}", keyword),
        })?;

        let values = fields
            .map(|field| {
                field.parse::<BigInteger>().map_err(|e| BatchError::Syntax {
                    line,
                    message: format!("{:?}: {}", field, e),
                })
            })
            .collect::<BatchResult<Vec<_>>>()?;

        let (inputs, outputs) = operation.arity();
        if values.len() != inputs + outputs {
            return Err(BatchError::Syntax {
                line,
                message: format!(
                    "{} takes {} values, found {}",
                    operation,
                    inputs + outputs,
                    values.len()
                ),
            });
        }

        let mut inputs_values = values;
        let expected = inputs_values.split_off(inputs);
        cases.push(Case {
            line,
            operation,
            inputs: inputs_values,
            expected,
        });
    }

    Ok(cases)
}

/// Evaluate parsed cases and collect the report
pub fn run_cases(cases: &[Case], config: &BatchConfig) -> BatchReport {
    let mut report = BatchReport::default();

    for case in cases {
        let actual = match case.operation.evaluate(&case.inputs) {
            Ok(values) if values == case.expected => {
                info!("line {}: {} passed", case.line, case.operation);
                report.passed += 1;
                continue;
            }
            Ok(values) => join(&values),
            Err(e) => format!("error: {}", e),
        };

        warn!(
            "line {}: {} expected {}, got {}",
            case.line,
            case.operation,
            join(&case.expected),
            actual
        );
        report.failures.push(CaseFailure {
            line: case.line,
            operation: case.operation,
            expected: join(&case.expected),
            actual,
        });

        if config.fail_fast {
            break;
        }
    }

    report
}

/// Parse and run all cases from a reader
pub fn run_reader<R: BufRead>(reader: R, config: &BatchConfig) -> BatchResult<BatchReport> {
    let cases = parse_cases(reader)?;
    Ok(run_cases(&cases, config))
}

/// Parse and run all cases from a file
pub fn run_file(path: &Path, config: &BatchConfig) -> BatchResult<BatchReport> {
    let file = File::open(path)?;
    run_reader(BufReader::new(file), config)
}
