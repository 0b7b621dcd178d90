//! End-to-end checks of the scan -> parse -> print pipeline, wired the same
//! way the driver wires it.

use cursor::Line;
use errors::{ErrorReporter, LoxError, LoxErrors};
use parser::AstPrinter;
use scanner::Scanner;

use pretty_assertions::assert_eq;

#[ctor::ctor]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn run(source: &str) -> Result<String, LoxErrors> {
    let mut reporter = ErrorReporter::new();
    let tokens = Scanner::new(source).scan_tokens(&mut reporter);

    let expr = match parser::Parser::new(tokens).parse() {
        Ok(expr) => Some(expr),
        Err(e) => {
            reporter.report(e.into());
            None
        }
    };

    if reporter.had_error() {
        return Err(reporter.into_errors());
    }
    Ok(expr.map(|e| AstPrinter.print(&e)).unwrap_or_default())
}

#[test]
fn prints_the_disambiguated_tree() {
    assert_eq!(run("1+2*3").unwrap(), "(+ 1 (* 2 3))");
    assert_eq!(run("(1+2)*3").unwrap(), "(* (group (+ 1 2)) 3)");
    assert_eq!(run("1-2-3").unwrap(), "(- (- 1 2) 3)");
    assert_eq!(run("!!true").unwrap(), "(! (! true))");
    assert_eq!(run("-123 * (45.67)").unwrap(), "(* (- 123) (group 45.67))");
}

#[test]
fn string_literals_flow_through_decoded() {
    assert_eq!(run("\"abc\" == \"abc\"").unwrap(), "(== abc abc)");
}

#[test]
fn input_may_span_lines() {
    assert_eq!(run("1 +\n2").unwrap(), "(+ 1 2)");
}

#[test]
fn comments_are_invisible_to_the_parser() {
    assert_eq!(run("1 + // irrelevant\n2").unwrap(), "(+ 1 2)");
}

#[test]
fn unterminated_grouping_yields_a_diagnostic_and_no_tree() {
    assert_eq!(
        run("(1+2"),
        Err(LoxErrors(vec![LoxError::new(
            Line(1),
            " at end",
            "Expect ')' after expression."
        )]))
    );
}

#[test]
fn scan_errors_suppress_printing() {
    // The scanner drops the offending char, the parser then also fails on
    // the truncated token sequence; both diagnostics surface, in order.
    assert_eq!(
        run("1 + @"),
        Err(LoxErrors(vec![
            LoxError::new(Line(1), "", "Unexpected character."),
            LoxError::new(Line(1), " at end", "Expect expression."),
        ]))
    );
}

#[test]
fn diagnostics_render_with_line_numbers() {
    let errors = run("1 +\n(2").unwrap_err();
    assert_eq!(errors.to_string(), "[line 2] Error at end: Expect ')' after expression.");
}
