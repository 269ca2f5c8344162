use crate::client::{BookRecord, HttpClient};
use crate::error::CliError;
use crate::io::IoHandler;
use crate::session::Session;

/// Handler function for the catalog search action.
pub async fn handle_search_books_action<Http: HttpClient, IO: IoHandler>(
    client: &Http,
    session: &Session,
    io_handler: &mut IO,
) -> Result<(), CliError> {
    let query = io_handler.read_line("Search query (leave empty to list all):")?;

    io_handler.write_line("\nFetching catalog...")?;
    let records = session.search_books(client, &query).await?;

    if records.is_empty() {
        io_handler.write_line("No books found.")?;
        return Ok(());
    }

    io_handler.write_line(&format_row(&BookRecord {
        isbn: "isbn".into(),
        book_id: "book_id".into(),
        title: "title".into(),
        author: "author".into(),
        publisher: "publisher".into(),
        year: "year".into(),
        genre: "genre".into(),
        price: "price".into(),
        stock: "stock".into(),
        format: "format".into(),
    }))?;
    for record in &records {
        io_handler.write_line(&format_row(record))?;
    }
    io_handler.write_line(&format!("{} book(s).", records.len()))?;
    Ok(())
}

fn format_row(r: &BookRecord) -> String {
    format!(
        "{:<15} {:<8} {:<28} {:<20} {:<16} {:<5} {:<12} {:<8} {:<6} {:<8}",
        r.isbn, r.book_id, r.title, r.author, r.publisher, r.year, r.genre, r.price, r.stock,
        r.format
    )
}
