//! Dashboard page — search form plus the ranked lead table.

use axum::response::Html;

/// GET / — serve the dashboard.
pub async fn dashboard() -> Html<&'static str> {
    Html(PAGE_HTML)
}

const PAGE_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>PubScout — Lead Finder</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body { font-family: 'Segoe UI', sans-serif; background: #f4f5f7; padding: 24px; }
        .container { max-width: 1300px; margin: 0 auto; background: white; border-radius: 10px;
                     box-shadow: 0 4px 20px rgba(0,0,0,0.08); overflow: hidden; }
        .header { background: #2c3e6b; color: white; padding: 24px; }
        .header h1 { font-size: 1.6em; }
        .header p { opacity: 0.8; margin-top: 4px; }
        .search-form { padding: 24px; display: grid; gap: 14px; border-bottom: 1px solid #e3e5e8;
                       grid-template-columns: 2fr 1fr 1fr auto; align-items: end; }
        label { display: block; font-size: 0.85em; font-weight: 600; color: #4a5060; margin-bottom: 6px; }
        input { width: 100%; padding: 10px; border: 1px solid #ccd1d9; border-radius: 6px; font-size: 1em; }
        button { background: #2c3e6b; color: white; border: none; padding: 11px 22px;
                 border-radius: 6px; font-size: 1em; cursor: pointer; }
        button:disabled { opacity: 0.6; cursor: wait; }
        .results { padding: 24px; }
        .count { font-weight: 600; color: #4a5060; margin-bottom: 12px; }
        table { width: 100%; border-collapse: collapse; }
        th { text-align: left; padding: 10px; font-size: 0.8em; text-transform: uppercase;
             color: #4a5060; border-bottom: 2px solid #e3e5e8; }
        td { padding: 10px; border-bottom: 1px solid #eef0f2; font-size: 0.92em; vertical-align: top; }
        .score { display: inline-block; padding: 3px 10px; border-radius: 12px; font-weight: 600; }
        .score-high { background: #d9f2e0; color: #1d6b39; }
        .score-medium { background: #fdf1cf; color: #8a6a12; }
        .score-low { background: #fadcdc; color: #8c2626; }
        .error { background: #fadcdc; color: #8c2626; padding: 12px; border-radius: 6px; margin-bottom: 12px; }
        a { color: #2c3e6b; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>PubScout</h1>
            <p>Ranked outreach leads from recent PubMed publications</p>
        </div>
        <form class="search-form" id="searchForm">
            <div>
                <label for="keywords">Keywords (comma-separated)</label>
                <input id="keywords" type="text" placeholder="hepatotoxicity, organoid, 3D cell culture">
            </div>
            <div>
                <label for="yearsBack">Years back</label>
                <input id="yearsBack" type="number" value="2" min="1" max="10">
            </div>
            <div>
                <label for="maxResults">Max results</label>
                <input id="maxResults" type="number" value="50" min="10" max="200">
            </div>
            <button type="submit" id="searchBtn">Search</button>
        </form>
        <div class="results" id="results" style="display:none">
            <div class="count" id="count"></div>
            <table>
                <thead>
                    <tr><th>Rank</th><th>Score</th><th>Name</th><th>Affiliation</th>
                        <th>Email</th><th>Paper</th><th>Date</th><th>PubMed</th></tr>
                </thead>
                <tbody id="rows"></tbody>
            </table>
        </div>
    </div>
    <script>
        const form = document.getElementById('searchForm');
        form.addEventListener('submit', async (e) => {
            e.preventDefault();
            const keywords = document.getElementById('keywords').value
                .split(',').map(k => k.trim()).filter(k => k.length > 0);
            if (keywords.length === 0) { alert('Enter at least one keyword'); return; }

            const btn = document.getElementById('searchBtn');
            btn.disabled = true;
            try {
                const resp = await fetch('/api/search', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({
                        keywords: keywords,
                        years_back: parseInt(document.getElementById('yearsBack').value),
                        max_results: parseInt(document.getElementById('maxResults').value)
                    })
                });
                if (!resp.ok) {
                    const body = await resp.json();
                    throw new Error(body.error || resp.statusText);
                }
                render(await resp.json());
            } catch (err) {
                document.getElementById('results').style.display = 'block';
                document.getElementById('count').innerHTML =
                    '<div class="error">Search failed: ' + err.message + '</div>';
                document.getElementById('rows').innerHTML = '';
            } finally {
                btn.disabled = false;
            }
        });

        function render(data) {
            document.getElementById('results').style.display = 'block';
            document.getElementById('count').textContent = data.total + ' leads found';
            document.getElementById('rows').innerHTML = data.leads.map(lead => {
                const cls = lead.score >= 70 ? 'score-high' : lead.score >= 50 ? 'score-medium' : 'score-low';
                const email = lead.email
                    ? '<a href="mailto:' + lead.email + '">' + lead.email + '</a>' : 'N/A';
                return '<tr>'
                    + '<td>#' + lead.rank + '</td>'
                    + '<td><span class="score ' + cls + '">' + lead.score + '</span></td>'
                    + '<td><strong>' + lead.name + '</strong></td>'
                    + '<td>' + lead.affiliation + '</td>'
                    + '<td>' + email + '</td>'
                    + '<td>' + lead.paper_title + '</td>'
                    + '<td>' + lead.publication_date + '</td>'
                    + '<td><a href="https://pubmed.ncbi.nlm.nih.gov/' + lead.pmid + '" target="_blank">View</a></td>'
                    + '</tr>';
            }).join('');
        }
    </script>
</body>
</html>"##;
