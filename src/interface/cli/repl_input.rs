//! REPL 입력 처리기.
//! 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝나면 `None`.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

pub fn read_repl_input<R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    // 잘못된 UTF-8 바이트는 대체 문자로 바꿔 일반 입력으로 처리한다.
    let mut buf = Vec::new();
    let read = input
        .read_until(b'\n', &mut buf)
        .context("failed to read command line")?;
    if read == 0 {
        return Ok(None);
    }

    let line = String::from_utf8_lossy(&buf).into_owned();
    Ok(Some(trim_newline(line)))
}

fn trim_newline(mut s: String) -> String {
    while matches!(s.chars().last(), Some('\n' | '\r')) {
        s.pop();
    }
    s
}
