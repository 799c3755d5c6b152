use std::io::{self, BufRead, Write};
use std::sync::mpsc::channel;
use std::thread;
use std::time::Duration;

use super_checkers::api::api_top::ApiState;

fn main() {
    let (command_tx, command_rx) = channel::<String>();

    // Reader thread feeds stdin lines into the command channel so the main
    // loop can keep ticking the session between commands.
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if command_tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut api = ApiState::new();
    let stdout = io::stdout();

    {
        let mut out = stdout.lock();
        writeln!(out, "info string super_checkers ready").ok();
        api.write_state(&mut out).ok();
        out.flush().ok();
    }

    loop {
        let mut out = stdout.lock();
        let mut quit = false;

        while let Ok(command) = command_rx.try_recv() {
            match api.handle_command(&command, &mut out) {
                Ok(true) => {
                    quit = true;
                    break;
                }
                Ok(false) => {}
                Err(_) => {
                    quit = true;
                    break;
                }
            }
        }

        if api.tick(&mut out).is_err() {
            quit = true;
        }
        out.flush().ok();
        drop(out);

        if quit {
            break;
        }

        // Sleep briefly to avoid busy-waiting
        thread::sleep(Duration::from_millis(10));
    }
}
