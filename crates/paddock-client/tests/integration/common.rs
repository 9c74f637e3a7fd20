//! HTML fixtures shaped like the world-ranking pages.

/// Landing page with the event selector.
pub fn landing_page(event_ids: &[u32]) -> String {
    let options: String = event_ids
        .iter()
        .map(|id| format!(r#"<option value="{id}">Event {id}</option>"#))
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>World Ranking List</title></head>
<body>
  <nav><a href="/E">FSE</a> <a href="/C">FSC</a></nav>
  <form>
    <label for="WorldEvents">Event</label>
    <select id="WorldEvents" name="event">{options}</select>
  </form>
</body>
</html>"#
    )
}

/// Event page with a header row followed by `rows`.
pub fn event_page(name: &str, description: &str, rows: &[String]) -> String {
    let rows: String = rows.iter().map(|r| format!("<tr>{r}</tr>")).collect();
    format!(
        r#"<!DOCTYPE html>
<html>
<body>
  <div class="content">
    <h4>{name}</h4>
    {description}<br>
    <a href="/E">back</a>
    <a id="results"></a>
    <table class="legend"><tr><td>legend</td></tr></table>
    <table class="wrl_table">
      <tr>
        <th>Team</th><th>Pl.</th><th>CO</th><th>BP</th><th>ED</th><th>AC</th>
        <th>SP</th><th>AX</th><th>EN</th><th>EF</th><th>Pen.</th><th>Total</th>
      </tr>
      {rows}
    </table>
  </div>
</body>
</html>"#
    )
}

/// A scored discipline cell.
pub fn scored(place: u32, score: f64) -> String {
    format!(r#"<td><span title="{score}">{place}.</span></td>"#)
}

/// A discipline cell for a team that did not take part.
pub fn unscored() -> String {
    "<td>-</td>".to_string()
}

/// One team row. `disciplines` must hold eight cells.
pub fn team_row(
    country: &str,
    name: &str,
    place: &str,
    disciplines: &[String],
    penalty: &str,
    total: &str,
    car_kind: &str,
) -> String {
    assert_eq!(disciplines.len(), 8, "eight discipline cells");
    format!(
        r#"<td title="{country} | {name}"><img src="/flags/{country}.png"> {name}</td><td>{place}</td>{}<td>{penalty}</td><td title="{car_kind}">{total}</td>"#,
        disciplines.concat()
    )
}
