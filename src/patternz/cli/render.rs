use colored::Colorize;
use patternz::api::{CmdMessage, MessageLevel};
use patternz::config::{DemoConfig, CONFIG_KEYS};
use patternz::output::{LineStyle, Output};

pub(super) fn print_output(output: &Output) {
    for line in output.lines() {
        match line.style {
            LineStyle::Plain => println!("{}", line.text),
            LineStyle::Heading => println!("{}", line.text.bold()),
            LineStyle::Rule => println!("{}", line.text.dimmed()),
            LineStyle::Blank => println!(),
        }
    }
}

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_config(config: &DemoConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}
