//! Calculator commands: `set` and `exit`.
//!
//! A command line is a command name followed by whitespace-separated
//! arguments. A command that rejects its arguments is reported as "not a
//! command" so the session can still try the line as an expression.

use log::debug;
use phf::phf_map;

use crate::Context;
use crate::evaluator::{evaluate, evaluate_integer};

/// What the session should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

type Command = fn(&mut Context, &str) -> Option<Flow>;

static COMMANDS: phf::Map<&'static str, Command> = phf_map! {
    "exit" => exit as Command,
    "set" => set as Command,
};

/// Run `line` as a command.
///
/// `line` must already be trimmed. Returns `None` when the first word is not
/// a known command or the command rejects its arguments; the context is
/// left untouched in that case.
pub fn execute(ctx: &mut Context, line: &str) -> Option<Flow> {
    let (name, args) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(name, args)| (name, args.trim_start()));
    let command = COMMANDS.get(name)?;
    let flow = command(ctx, args);
    debug!("command {name:?} with arguments {args:?}: {flow:?}");
    flow
}

fn exit(_ctx: &mut Context, args: &str) -> Option<Flow> {
    args.is_empty().then_some(Flow::Exit)
}

// `set <slot> <expr>`: the expression is the rest of the line, so it may
// contain spaces.
fn set(ctx: &mut Context, args: &str) -> Option<Flow> {
    let (slot, expr) = args.split_once(char::is_whitespace)?;
    let slot = evaluate_integer(slot)?;
    let value = evaluate(ctx, expr)?;
    ctx.set_slot(slot, value).then_some(Flow::Continue)
}
