use std::{
    io::{BufRead, Write},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
    time::Duration,
};

use anyhow::{bail, Context};
use log::info;

use crate::{
    session::Session,
    ticker::{nature::NatureTicker, Ticker, TickerHost},
};

pub enum Outcome {
    Done,
    Output(String),
    Exit,
}

/// Line-based front end. Each line is one command; the reply is `OK` (preceded by any output)
/// or `! <error>`.
pub struct Cli {
    session_arc: Arc<RwLock<Session>>,
    ticker: Option<TickerHost>,
}

impl Cli {
    pub fn new(session_arc: Arc<RwLock<Session>>) -> Self {
        Self {
            session_arc,
            ticker: None,
        }
    }

    pub fn run<R, W>(&mut self, input: R, mut output: W) -> anyhow::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        for line_res in input.lines() {
            let line = line_res.context("Reading command")?;
            let args = line.split_whitespace();

            match self.handle_cmd(args) {
                Ok(Outcome::Exit) => break,
                Ok(Outcome::Output(text)) => writeln!(output, "{text}\nOK")?,
                Ok(Outcome::Done) => writeln!(output, "OK")?,
                Err(e) => writeln!(output, "! {e:#}")?,
            }
        }

        if let Some(ticker) = self.ticker.take() {
            ticker.stop_and_join();
        }

        Ok(())
    }

    pub fn handle_cmd<'a, I>(&mut self, mut args: I) -> anyhow::Result<Outcome>
    where
        I: Iterator<Item = &'a str>,
    {
        match args.next().context("No command")? {
            "step" => {
                let times = args.next().unwrap_or("1").parse::<usize>()?;
                self.write().step(times);
            }

            "run" => {
                let delay = match args.next() {
                    Some(millis) => self.write().set_loop_delay(millis.parse()?),
                    None => self.read().loop_delay(),
                };

                self.start(delay);
            }

            "stop" => {
                if !self.stop() {
                    bail!("Not running");
                }
            }

            "delay" => {
                let millis = args.next().context("missing delay")?.parse::<u64>()?;
                let delay = self.write().set_loop_delay(millis);

                if let Some(ticker) = &self.ticker {
                    ticker.set_delay(delay);
                }

                return Ok(Outcome::Output(format!("{}", delay.as_millis())));
            }

            "clear" => {
                self.write().clear();
            }

            "random" => {
                let size = self.write().randomize();
                return Ok(Outcome::Output(format!("{}x{}", size.width, size.height)));
            }

            "resize" => {
                let width = args.next().context("missing width")?.parse::<usize>()?;
                let height = args.next().context("missing height")?.parse::<usize>()?;

                let size = self.write().resize(width, height);
                return Ok(Outcome::Output(format!("{}x{}", size.width, size.height)));
            }

            "toggle" => {
                let x = args.next().context("missing x")?.parse::<usize>()?;
                let y = args.next().context("missing y")?.parse::<usize>()?;

                self.write().toggle(x, y)?;
            }

            "viewport" => {
                let width = args.next().context("missing width")?.parse::<usize>()?;
                let height = args.next().context("missing height")?.parse::<usize>()?;

                let max = self.write().set_viewport(width, height)?;
                return Ok(Outcome::Output(format!("max {}x{}", max.width, max.height)));
            }

            "show" => {
                let session = self.read();
                return Ok(Outcome::Output(format!(
                    "generation {}, {} alive\n{}",
                    session.game.generation,
                    session.board().alive_count(),
                    session.board()
                )));
            }

            "exit" => {
                return Ok(Outcome::Exit);
            }

            _ => bail!("Unknown command"),
        }

        Ok(Outcome::Done)
    }

    fn start(&mut self, delay: Duration) {
        if let Some(ticker) = &self.ticker {
            ticker.set_delay(delay);
            return;
        }

        info!("Running with {}ms delay", delay.as_millis());
        self.ticker = Some(TickerHost::start(
            self.session_arc.clone(),
            delay,
            Box::new(|| Box::new(NatureTicker) as Box<dyn Ticker>),
        ));
    }

    fn stop(&mut self) -> bool {
        match self.ticker.take() {
            Some(ticker) => {
                ticker.stop();
                true
            }
            None => false,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        self.session_arc.read().expect("Session lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.session_arc.write().expect("Session lock poisoned")
    }
}
