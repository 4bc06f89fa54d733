use super::ValType;
use std::fmt;

/// Function types classify the signature of functions, mapping a vector of parameters to a vector
/// of results.
///
/// The [`Display`](fmt::Display) form concatenates the abbreviations of each side and joins the
/// two sides with an underscore, writing `null` for an empty side: `(i32, f64) -> ()` is
/// displayed as `i32f64_null`.
///
/// <https://www.w3.org/TR/wasm-core-1/#function-types%E2%91%A0>
/// <https://www.w3.org/TR/wasm-core-1/#binary-functype>
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct FuncType {
    pub parameters: Vec<ValType>,
    pub results: Vec<ValType>,
}

impl fmt::Display for FuncType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_side(f, &self.parameters)?;
        f.write_str("_")?;
        write_side(f, &self.results)
    }
}

fn write_side(f: &mut fmt::Formatter<'_>, types: &[ValType]) -> fmt::Result {
    if types.is_empty() {
        return f.write_str("null");
    }
    types.iter().try_for_each(|t| write!(f, "{t}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn functype(parameters: &[ValType], results: &[ValType]) -> FuncType {
        FuncType {
            parameters: parameters.to_vec(),
            results: results.to_vec(),
        }
    }

    #[test]
    fn display_joins_abbreviations() {
        use ValType::*;

        let cases = [
            (functype(&[], &[]), "null_null"),
            (functype(&[I32], &[]), "i32_null"),
            (functype(&[I32, F64], &[]), "i32f64_null"),
            (functype(&[F32, I32, F64], &[]), "f32i32f64_null"),
            (functype(&[], &[I64]), "null_i64"),
            (functype(&[], &[I32, F64]), "null_i32f64"),
            (functype(&[I32], &[I64]), "i32_i64"),
            (functype(&[I64, F32, F64], &[F32, I32, F64]), "i64f32f64_f32i32f64"),
        ];

        for (ft, expected) in cases {
            assert_eq!(ft.to_string(), expected);
        }
    }
}
