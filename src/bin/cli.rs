//! lineecho CLI Client
//!
//! Sends lines to a lineecho server and prints the replies.

use std::io::{self, BufRead, BufReader, BufWriter};
use std::net::TcpStream;
use std::process::ExitCode;

use clap::Parser;
use lineecho::protocol::{write_request, LineReader, Request};

/// lineecho CLI
#[derive(Parser, Debug)]
#[command(name = "lineecho-cli")]
#[command(about = "Client for the lineecho server")]
#[command(version)]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:4589")]
    server: String,

    /// Leave the session by disconnecting instead of sending `quit`
    #[arg(long)]
    no_quit: bool,

    /// Messages to send, one request line each. Reads stdin when empty.
    messages: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("lineecho-cli: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> lineecho::Result<()> {
    let stream = TcpStream::connect(&args.server)?;
    let mut reader = LineReader::new(BufReader::new(stream.try_clone()?));
    let mut writer = BufWriter::new(stream);

    let mut send = |line: &str| -> lineecho::Result<bool> {
        let request = Request::from_line(line.to_string());
        write_request(&mut writer, &request)?;
        if request.is_quit() {
            return Ok(false);
        }
        match reader.read_reply()? {
            Some(reply) => {
                println!("{}", reply);
                Ok(true)
            }
            None => Ok(false),
        }
    };

    if args.messages.is_empty() {
        for line in io::stdin().lock().lines() {
            if !send(&line?)? {
                return Ok(());
            }
        }
    } else {
        // An embedded newline would become several requests on the wire
        for line in args.messages.iter().flat_map(|m| m.split('\n')) {
            if !send(line)? {
                return Ok(());
            }
        }
    }

    if !args.no_quit {
        send(lineecho::protocol::QUIT_SENTINEL)?;
    }

    Ok(())
}
