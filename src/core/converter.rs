use crate::domain::model::{InternalFault, RomanNumeral, ValidatedNumber};
use crate::domain::ports::NumeralEncoder;

/// 由大到小排列，包含所有減法組合；順序不可更動
const NUMERAL_TABLE: [(&str, u16); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// 貪婪減法編碼
pub fn convert(number: ValidatedNumber) -> RomanNumeral {
    let mut remaining = number.get();
    let mut output = String::with_capacity(crate::domain::model::MAX_NUMERAL_LEN);

    for (symbol, value) in NUMERAL_TABLE {
        while remaining >= value {
            output.push_str(symbol);
            remaining -= value;
        }
    }

    // 1..=3999 的輸出必定符合字母與長度限制
    RomanNumeral::from_encoded(output)
}

/// 反向展開：小值在大值之前則相減。
/// 不檢查是否為標準寫法，只用於還原數值
pub fn decode(numeral: &str) -> Option<u32> {
    let mut total: u32 = 0;
    let mut previous: u32 = 0;

    for c in numeral.chars().rev() {
        let value = symbol_value(c)?;
        if value < previous {
            total = total.checked_sub(value)?;
        } else {
            total = total.checked_add(value)?;
            previous = value;
        }
    }

    (total > 0).then_some(total)
}

fn symbol_value(c: char) -> Option<u32> {
    let value = match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => return None,
    };
    Some(value)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RomanEncoder;

impl NumeralEncoder for RomanEncoder {
    fn encode(&self, number: ValidatedNumber) -> Result<RomanNumeral, InternalFault> {
        Ok(convert(number))
    }
}
