//! # 交互输入工具
//!
//! 带默认值的提示输入：直接回车使用默认值，输入无效时重新提示。
//! 标准输入不是终端时逐行读取，读到末尾返回 `InputClosed`。
//!
//! ## 依赖关系
//! - 被 `commands/interactive.rs` 使用
//! - 使用 `console` 读取终端输入

use crate::error::{ChromoError, Result};
use crate::utils::output;

use console::Term;
use std::io::{self, BufRead, IsTerminal};
use std::str::FromStr;

/// 输入来源：交互终端，或管道/文件等普通输入流
enum Input {
    Terminal,
    Stream(Box<dyn BufRead>),
}

/// 终端提示器
///
/// 输入流读到末尾时返回 `ChromoError::InputClosed`，由调用方结束会话。
pub struct Prompter {
    term: Term,
    input: Input,
}

impl Default for Prompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter {
    /// 标准输入为终端时使用 `console` 读取，否则按行读取标准输入
    pub fn new() -> Self {
        let term = Term::stdout();
        let input = if io::stdin().is_terminal() {
            Input::Terminal
        } else {
            Input::Stream(Box::new(io::BufReader::new(io::stdin())))
        };
        Prompter { term, input }
    }

    /// 从给定输入流读取
    pub fn from_reader<R: BufRead + 'static>(reader: R) -> Self {
        Prompter {
            term: Term::stdout(),
            input: Input::Stream(Box::new(reader)),
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.term.write_str(prompt).map_err(input_error)?;

        match &mut self.input {
            Input::Terminal => self.term.read_line().map_err(input_error),
            Input::Stream(reader) => {
                let mut line = String::new();
                if reader.read_line(&mut line).map_err(input_error)? == 0 {
                    // 非终端输入不会回显换行
                    self.term.write_line("").map_err(input_error)?;
                    return Err(ChromoError::InputClosed);
                }
                Ok(line.trim_end_matches(['\r', '\n']).to_string())
            }
        }
    }

    fn read(&mut self, prompt: &str, default: &str) -> Result<String> {
        self.read_line(&format!("{} [default: {}]: ", prompt, default))
    }

    /// 读取数值
    pub fn number<T>(&mut self, prompt: &str, default: T) -> Result<T>
    where
        T: FromStr + Copy + std::fmt::Display,
    {
        loop {
            let line = self.read(prompt, &default.to_string())?;
            match parse_or_default(&line, default) {
                Some(v) => return Ok(v),
                None => output::print_warning("Please enter a valid number"),
            }
        }
    }

    /// 读取选项之一
    pub fn choice(&mut self, prompt: &str, default: &str, options: &[&str]) -> Result<String> {
        loop {
            let line = self.read(prompt, default)?;
            match choose(&line, default, options) {
                Some(v) => return Ok(v),
                None => output::print_warning(&format!("Please enter one of: {}", options.join(", "))),
            }
        }
    }

    /// 等待回车
    pub fn pause(&mut self, prompt: &str) -> Result<()> {
        self.read_line(prompt).map(|_| ())
    }

    /// 读取菜单选择
    pub fn menu(&mut self, prompt: &str) -> Result<String> {
        self.read_line(prompt).map(|s| s.trim().to_string())
    }
}

fn input_error(e: io::Error) -> ChromoError {
    ChromoError::Other(format!("failed to read input: {}", e))
}

/// 空输入返回默认值，无法解析时返回 None
pub fn parse_or_default<T: FromStr>(line: &str, default: T) -> Option<T> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Some(default)
    } else {
        trimmed.parse().ok()
    }
}

/// 空输入返回默认值，不在选项中时返回 None
pub fn choose(line: &str, default: &str, options: &[&str]) -> Option<String> {
    let trimmed = line.trim();
    let value = if trimmed.is_empty() { default } else { trimmed };
    options
        .iter()
        .find(|o| o.eq_ignore_ascii_case(value))
        .map(|o| o.to_string())
}
