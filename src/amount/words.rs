//! # Amount in Words
//!
//! Spells a peso amount the way it is printed under the figure on a cashout
//! ticket: `ONE THOUSAND TWO HUNDRED THIRTY-FOUR PESOS AND FIFTY CENTAVOS`.
//!
//! ## Grammar
//!
//! ```text
//! <integer words> PESO[S] AND <fraction words> CENTAVO[S]
//! <integer words> PESO[S] AND NO CENTAVOS
//! ```
//!
//! The integer part is split into base-1000 chunks; zero chunks contribute
//! nothing, so 1,000,005 reads `ONE MILLION FIVE`. Exactly one peso or one
//! centavo is singular, everything else (including zero) is plural.

use std::fmt;

use super::{Amount, AmountInput};
use crate::error::CashoutError;

const ONES: [&str; 20] = [
    "ZERO",
    "ONE",
    "TWO",
    "THREE",
    "FOUR",
    "FIVE",
    "SIX",
    "SEVEN",
    "EIGHT",
    "NINE",
    "TEN",
    "ELEVEN",
    "TWELVE",
    "THIRTEEN",
    "FOURTEEN",
    "FIFTEEN",
    "SIXTEEN",
    "SEVENTEEN",
    "EIGHTEEN",
    "NINETEEN",
];

const TENS: [&str; 10] = [
    "", "", "TWENTY", "THIRTY", "FORTY", "FIFTY", "SIXTY", "SEVENTY", "EIGHTY", "NINETY",
];

// Indexed by chunk position. Covers the full u64 range so the speller is
// total even though `Amount` stops at BILLION.
const SCALES: [&str; 7] = [
    "",
    "THOUSAND",
    "MILLION",
    "BILLION",
    "TRILLION",
    "QUADRILLION",
    "QUINTILLION",
];

/// Letter case of the rendered phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordCase {
    /// `ONE PESO AND ONE CENTAVO`
    #[default]
    Upper,
    /// `One peso and one centavo`
    Sentence,
}

/// Display adapter that renders an [`Amount`] in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountWords {
    amount: Amount,
    case: WordCase,
}

impl AmountWords {
    pub fn new(amount: Amount) -> Self {
        Self {
            amount,
            case: WordCase::Upper,
        }
    }

    /// Render with only the first letter capitalised.
    pub fn sentence(mut self) -> Self {
        self.case = WordCase::Sentence;
        self
    }

    pub fn case(mut self, case: WordCase) -> Self {
        self.case = case;
        self
    }

    fn upper(&self) -> String {
        let pesos = self.amount.pesos();
        let centavos = self.amount.centavos();

        let peso_unit = if pesos == 1 { "PESO" } else { "PESOS" };
        let fraction = match centavos {
            0 => "NO CENTAVOS".to_string(),
            1 => "ONE CENTAVO".to_string(),
            n => format!("{} CENTAVOS", below_hundred(n.into())),
        };

        format!("{} {} AND {}", integer_words(pesos), peso_unit, fraction)
    }
}

impl fmt::Display for AmountWords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let upper = self.upper();
        match self.case {
            WordCase::Upper => f.write_str(&upper),
            WordCase::Sentence => {
                let lower = upper.to_lowercase();
                let mut chars = lower.chars();
                if let Some(first) = chars.next() {
                    write!(f, "{}{}", first.to_ascii_uppercase(), chars.as_str())?;
                }
                Ok(())
            }
        }
    }
}

/// Spell an amount in upper case.
pub fn amount_in_words(amount: Amount) -> String {
    amount.words().to_string()
}

/// Parse and spell a caller-supplied amount.
///
/// ```
/// use cashout::amount::words_of;
///
/// assert_eq!(words_of(1.01)?, "ONE PESO AND ONE CENTAVO");
/// assert_eq!(words_of("0")?, "ZERO PESOS AND NO CENTAVOS");
/// # Ok::<(), cashout::CashoutError>(())
/// ```
///
/// ## Errors
///
/// `InvalidAmount` when the input is not a finite non-negative number.
pub fn words_of(input: impl Into<AmountInput>) -> Result<String, CashoutError> {
    let amount = Amount::try_from(input.into())?;
    Ok(amount_in_words(amount))
}

/// Spell a whole number (`0` is `ZERO`).
pub fn integer_words(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }

    let mut chunks = Vec::new();
    let mut rest = n;
    let mut scale = 0;
    while rest > 0 {
        let chunk = (rest % 1000) as u16;
        if chunk != 0 {
            let mut words = chunk_words(chunk);
            if scale > 0 {
                words.push(' ');
                words.push_str(SCALES[scale]);
            }
            chunks.push(words);
        }
        rest /= 1000;
        scale += 1;
    }

    chunks.reverse();
    chunks.join(" ")
}

/// 1..=999
fn chunk_words(n: u16) -> String {
    let hundreds = n / 100;
    let rest = n % 100;

    let mut parts = Vec::with_capacity(2);
    if hundreds > 0 {
        parts.push(format!("{} HUNDRED", ONES[hundreds as usize]));
    }
    if rest > 0 {
        parts.push(below_hundred(rest));
    }
    parts.join(" ")
}

/// 0..=99
fn below_hundred(n: u16) -> String {
    if n < 20 {
        return ONES[n as usize].to_string();
    }
    let tens = TENS[(n / 10) as usize];
    match n % 10 {
        0 => tens.to_string(),
        ones => format!("{}-{}", tens, ONES[ones as usize]),
    }
}
