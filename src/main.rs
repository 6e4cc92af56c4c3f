extern crate gutendex_shelf;

use crate::gutendex_shelf::{BookList, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut book_list = BookList::activate(Config::default());

    println!("{}", book_list.render());

    tokio::select! {
        _ = book_list.settled() => println!("{}", book_list.render()),
        r = tokio::signal::ctrl_c() => {
            r?;
            book_list.deactivate();
        }
    }

    Ok(())
}
