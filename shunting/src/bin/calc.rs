mod repl {
    use rustyline::error::ReadlineError;
    use shunting::{Builtin, Error, MathContext, ShuntingParser};

    pub fn help() {
        println!("Commands:");
        println!("  set <name> <expr>            evaluate expr and store it in a variable");
        println!("                               eg: set a (1+2)*sqrt(5)");
        println!("  def <name>(<arg>, ...) <expr>  define a function");
        println!("                               eg: def f1(x, y) sin(x) + cos(y) - 5");
        println!("  <expr>                       evaluate, eg: 5 + 2 * f1(a, 1) - 5");
        println!("  state                        show variables and functions");
        println!("  help                         show this text");
        println!("  quit                         leave");
        println!("Operators: + - * / % ^ and unary -");
        println!("Functions: {}", Builtin::names().collect::<Vec<_>>().join(", "));
    }

    pub fn state(cx: &MathContext) {
        let mut vars = cx.variables().peekable();
        if vars.peek().is_none() {
            println!("No variables");
        } else {
            println!("Variables:");
            for (name, value) in vars {
                println!("  {} = {}", name, value);
            }
        }
        let mut funcs = cx.functions().peekable();
        if funcs.peek().is_none() {
            println!("No user functions");
        } else {
            println!("Functions:");
            for f in funcs {
                println!("  {}({}) = {}", f.name, f.params.join(", "), f.body);
            }
        }
    }

    // one command in a fresh context, expressions are echoed in infix
    pub fn evalexpr(input: &str) -> Result<(), Error> {
        let mut cx = MathContext::new();
        if let Some(result) = cx.process_command(input)? {
            let expr = ShuntingParser::parse_str(input)?;
            println!("{} = {}", expr, result);
        }
        Ok(())
    }

    pub fn run_command(cx: &mut MathContext, input: &str) {
        match input {
            "state" => state(cx),
            "help" => help(),
            _ => match cx.process_command(input) {
                Err(e) => println!("Error: {}", e),
                Ok(Some(result)) => println!("{}", result),
                Ok(None) => (),
            },
        }
    }

    pub fn run() -> Result<(), ReadlineError> {
        let mut rl = rustyline::DefaultEditor::new()?;
        let histpath = dirs::home_dir().map(|h| h.join(".calc_history"));
        if let Some(ref path) = histpath {
            let _ = rl.load_history(path);
        }
        println!("Type help for instructions");
        let mut cx = MathContext::new();
        loop {
            match rl.readline(">> ") {
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(e),
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(input);
                    if input == "quit" {
                        break;
                    }
                    run_command(&mut cx, input);
                }
            }
        }
        if let Some(ref path) = histpath {
            let _ = rl.save_history(path);
        }
        Ok(())
    }
}

fn main() {
    let status = if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        repl::evalexpr(&input).map_err(|e| e.to_string())
    } else {
        repl::run().map_err(|e| format!("readline: {}", e))
    };
    if let Err(e) = status {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
