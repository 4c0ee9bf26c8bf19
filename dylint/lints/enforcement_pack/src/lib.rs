//! Enforcement pack: Custom lints for tagfilter-core invariants.
//!
//! This lint library enforces architectural invariants at compile time,
//! keeping diagnostics out of the byte stream the crate produces.
//!
//! ## Implemented Lints
//!
//! - `NO_PRINTLN`: Forbids println!, eprintln!, and dbg! macros to enforce
//!   structured logging via tracing.

#![feature(rustc_private)]
#![warn(unused_extern_crates)]

extern crate rustc_ast;
extern crate rustc_lint;
extern crate rustc_session;
extern crate rustc_span;

use rustc_ast::{Expr, ExprKind, MacCall};
use rustc_lint::{EarlyContext, EarlyLintPass};
use rustc_session::{declare_lint_pass, declare_tool_lint};

declare_tool_lint! {
    /// **What it does:** Forbids use of `println!`, `eprintln!`, and `dbg!` macros in library code.
    ///
    /// **Why is this bad?** A stream filter's job is to hand bytes to its
    /// caller; stray writes to stdout/stderr interleave diagnostics with
    /// consumer output and bypass structured logging:
    /// - They cannot be filtered or redirected by a tracing subscriber
    /// - They carry no target, level, or structured fields
    /// - Debug output left in place ends up in production stdout
    ///
    /// **Known problems:** None.
    ///
    /// **Example:**
    /// ```rust,ignore
    /// // Bad - writes straight to stdout
    /// println!("entered drop span for {}", tag);
    /// dbg!(pending_len);
    ///
    /// // Good - structured event with a target and fields
    /// tracing::trace!(target: "tagfilter_core", tag = %tag, "drop span opened");
    /// ```
    pub enforcement_pack::NO_PRINTLN,
    Deny,
    "use of println!, eprintln!, or dbg! macros; use tracing instead"
}

declare_lint_pass!(NoPrintln => [NO_PRINTLN]);

impl EarlyLintPass for NoPrintln {
    fn check_expr(&mut self, cx: &EarlyContext<'_>, expr: &Expr) {
        if let ExprKind::MacCall(mac) = &expr.kind {
            check_macro(cx, mac, expr.span);
        }
    }
}

fn check_macro(cx: &EarlyContext<'_>, mac: &MacCall, span: rustc_span::Span) {
    let path = &mac.path;

    // Check if this is a single-segment macro call (println, eprintln, dbg)
    if path.segments.len() != 1 {
        return;
    }

    let macro_name = path.segments[0].ident.name.as_str();

    match macro_name {
        "println" => {
            rustc_lint::LintContext::span_lint(cx, NO_PRINTLN, span, |diag| {
                diag.help("use `tracing::info!` for structured logging");
                diag.note("`println!` interleaves with the consumer's output stream");
            });
        }
        "eprintln" => {
            rustc_lint::LintContext::span_lint(cx, NO_PRINTLN, span, |diag| {
                diag.help("use `tracing::error!` for structured logging");
                diag.note("`eprintln!` cannot be filtered by a tracing subscriber");
            });
        }
        "dbg" => {
            rustc_lint::LintContext::span_lint(cx, NO_PRINTLN, span, |diag| {
                diag.help("use `tracing::debug!` for structured logging");
                diag.note("`dbg!` is debug output that does not belong in library code");
            });
        }
        _ => {}
    }
}

#[unsafe(no_mangle)]
#[allow(unsafe_code)]
pub extern "C" fn register_lints(_sess: &rustc_session::Session, lint_store: &mut rustc_lint::LintStore) {
    lint_store.register_lints(&[&NO_PRINTLN]);
    lint_store.register_early_pass(|| Box::new(NoPrintln));
}

#[unsafe(no_mangle)]
pub fn dylint_version() -> *mut std::os::raw::c_char {
    std::ffi::CString::new(dylint_linting::DYLINT_VERSION)
        .expect("version string contains null byte")
        .into_raw()
}
