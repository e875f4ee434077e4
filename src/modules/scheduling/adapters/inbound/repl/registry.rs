// Static table of the commands a line can invoke, and the lookup into it.
//
// Purpose
// - Resolve leading keywords ("CREATE TALK") to a command and bind the remaining tokens
//   positionally onto that command's parameter names.
//
// Responsibilities
// - The first keyword is matched case insensitively. A second token joins the lookup only
//   when it is written entirely in upper case letters.
// - Tokens beyond the parameter list are dropped. Parameters without a token stay unbound
//   and are reported later by the command's own argument check.
// - An unknown command is not an error: the caller shows the help text instead.

use crate::modules::scheduling::adapters::inbound::repl::arguments::Arguments;
use crate::modules::scheduling::use_cases::{create_event, create_speaker, create_talk, print_talks};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandName {
    CreateEvent,
    CreateSpeaker,
    CreateTalk,
    PrintTalks,
    Exit,
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandName::CreateEvent => "CreateEvent",
            CommandName::CreateSpeaker => "CreateSpeaker",
            CommandName::CreateTalk => "CreateTalk",
            CommandName::PrintTalks => "PrintTalks",
            CommandName::Exit => "Exit",
        };
        f.write_str(name)
    }
}

#[derive(Debug)]
pub struct CommandSpec {
    pub name: CommandName,
    pub keyword: &'static str,
    pub sub_keyword: Option<&'static str>,
    pub parameters: &'static [&'static str],
}

pub static COMMANDS: [CommandSpec; 5] = [
    CommandSpec {
        name: CommandName::CreateEvent,
        keyword: "CREATE",
        sub_keyword: Some("EVENT"),
        parameters: &create_event::command::PARAMETERS,
    },
    CommandSpec {
        name: CommandName::CreateSpeaker,
        keyword: "CREATE",
        sub_keyword: Some("SPEAKER"),
        parameters: &create_speaker::command::PARAMETERS,
    },
    CommandSpec {
        name: CommandName::CreateTalk,
        keyword: "CREATE",
        sub_keyword: Some("TALK"),
        parameters: &create_talk::command::PARAMETERS,
    },
    CommandSpec {
        name: CommandName::PrintTalks,
        keyword: "PRINT",
        sub_keyword: Some("TALKS"),
        parameters: &print_talks::command::PARAMETERS,
    },
    CommandSpec {
        name: CommandName::Exit,
        keyword: "EXIT",
        sub_keyword: None,
        parameters: &[],
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: CommandName,
    pub arguments: Arguments,
}

pub fn dispatch(tokens: &[String]) -> Option<Invocation> {
    let (keyword, rest) = tokens.split_first()?;
    let sub_keyword = rest
        .first()
        .map(String::as_str)
        .filter(|token| is_upper_case_word(token));

    let spec = COMMANDS.iter().find(|spec| {
        spec.keyword.eq_ignore_ascii_case(keyword)
            && match (spec.sub_keyword, sub_keyword) {
                (Some(expected), Some(given)) => expected.eq_ignore_ascii_case(given),
                (None, None) => true,
                _ => false,
            }
    })?;

    let consumed = usize::from(sub_keyword.is_some());
    let arguments = spec
        .parameters
        .iter()
        .zip(&rest[consumed..])
        .map(|(name, value)| (*name, value.as_str()))
        .collect();

    tracing::debug!(command = %spec.name, "command resolved");
    Some(Invocation {
        command: spec.name,
        arguments,
    })
}

fn is_upper_case_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_uppercase())
}
