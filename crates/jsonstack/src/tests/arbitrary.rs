use alloc::string::String;

use quickcheck::{Arbitrary, Gen};

use crate::{Array, Map, Value};

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct JsonNumber(f64);

impl Arbitrary for JsonNumber {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut value = f64::arbitrary(g);
        while !value.is_finite() {
            value = f64::arbitrary(g);
        }

        Self(value)
    }
}

/// Strings are read verbatim up to the next quote, so generated text never
/// contains one.
fn quote_free(g: &mut Gen) -> String {
    String::arbitrary(g).replace('"', "")
}

impl Arbitrary for Value {
    fn arbitrary(g: &mut Gen) -> Self {
        fn gen_val(g: &mut Gen, depth: usize) -> Value {
            let choices = if depth == 0 { 4 } else { 6 };
            match usize::arbitrary(g) % choices {
                0 => Value::Null,
                1 => Value::Boolean(bool::arbitrary(g)),
                2 => Value::Number(JsonNumber::arbitrary(g).0),
                3 => Value::String(quote_free(g)),
                4 => {
                    let len = usize::arbitrary(g) % 4;
                    let mut arr = Array::new();
                    for _ in 0..len {
                        arr.push(gen_val(g, depth - 1));
                    }
                    Value::Array(arr)
                }
                _ => gen_object(g, depth - 1),
            }
        }

        fn gen_object(g: &mut Gen, depth: usize) -> Value {
            let len = usize::arbitrary(g) % 4;
            let mut map = Map::new();
            for _ in 0..len {
                map.insert(quote_free(g), gen_val(g, depth));
            }
            Value::Object(map)
        }

        let depth = usize::arbitrary(g) % 3;
        gen_object(g, depth)
    }
}
