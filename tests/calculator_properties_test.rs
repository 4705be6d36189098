use interest_calc::{compound_interest, simple_interest, CalculatorEngine, CompoundInterest};
use std::io::Cursor;

const PRINCIPALS: [f64; 5] = [0.0, 0.01, 1000.0, 1234.56, 1_000_000.0];
const RATES: [f64; 5] = [0.0, 1.0, 5.0, 7.25, 18.5];
const TIMES: [f64; 5] = [0.0, 0.5, 1.0, 3.5, 30.0];

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn test_simple_interest_is_linear_formula() {
    for p in PRINCIPALS {
        for r in RATES {
            for t in TIMES {
                assert!(close(simple_interest(p, r, t), p * r * t / 100.0));
            }
        }
    }
}

#[test]
fn test_compound_interest_matches_closed_form() {
    let principals = PRINCIPALS.iter().chain(&[-250.0, -1234.56]);
    for &p in principals {
        for t in TIMES {
            let rates = RATES.iter().chain(&[-3.5, -50.0, -100.0]);
            for &r in rates {
                let expected = p * (1.0 + r / 100.0).powf(t);
                let actual = compound_interest(p, t, r);
                assert!(close(actual, expected), "p={p} t={t} r={r}: {actual} != {expected}");
            }
        }
    }
}

#[test]
fn test_compound_interest_identities() {
    for p in PRINCIPALS {
        for r in RATES {
            assert_eq!(compound_interest(p, 0.0, r), p, "zero time, p={p} r={r}");
        }
        for t in TIMES {
            assert_eq!(compound_interest(p, t, 0.0), p, "zero rate, p={p} t={t}");
            for r in RATES {
                assert_eq!(compound_interest(0.0, t, r), 0.0);
            }
        }
    }
}

#[test]
fn test_one_period_of_compounding_covers_simple_interest() {
    for p in PRINCIPALS {
        for r in RATES {
            let compounded = compound_interest(p, 1.0, r);
            let simple_total = p + simple_interest(p, r, 1.0);
            assert!(
                compounded >= simple_total || close(compounded, simple_total),
                "p={p} r={r}: {compounded} < {simple_total}"
            );
        }
    }
}

#[test]
fn test_fractional_inputs() {
    let result = compound_interest(1000.5, 2.5, 5.25);
    let expected = 1000.5 * 1.0525_f64.powf(2.5);
    assert!((result - expected).abs() < 0.01);
}

#[test]
fn test_engine_and_function_agree() -> anyhow::Result<()> {
    let engine = CalculatorEngine::new(CompoundInterest);
    let mut output = Vec::new();
    let calculation = engine.run(Cursor::new("1234.56\n3.5\n7.25\n"), &mut output)?;

    assert_eq!(calculation.result, compound_interest(1234.56, 3.5, 7.25));
    let printed = String::from_utf8(output)?;
    let last = printed.lines().last().unwrap_or_default();
    assert_eq!(last, format!("{:.2}", calculation.result));
    assert!((calculation.result - 1234.56 * 1.0725_f64.powf(3.5)).abs() < 0.01);
    Ok(())
}
