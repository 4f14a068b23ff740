use crate::parsers::Page;
use url::Url;

pub const TITLE_URL: &str = "https://www.example.com/title/tt0108778/";
pub const CREDITS_URL: &str = "https://www.example.com/title/tt0108778/fullcredits";
pub const ACTOR_URL: &str = "https://www.example.com/name/nm0001/";

pub const TITLE_PAGE: &str = r#"<html><head><title>Friends (TV Series 1994-2004)</title></head>
<body><h1>Friends</h1><a href="fullcredits/?ref_=tt_cl_sm">See full cast &amp; crew</a></body></html>"#;

pub const CREDITS_PAGE: &str = r#"<html><body>
<h4 class="dataHeaderWithBorder">Directed by</h4>
<table class="simpleCreditsTable"><tr><td class="name"><a href="/name/nm9999/">Some Director</a></td></tr></table>
<table class="cast_list">
  <tr><td colspan="4" class="castlist_label">Series Cast complete:</td></tr>
  <tr class="odd">
    <td class="primary_photo"><a href="/name/nm0001/"><img alt="Jane Doe" src="x.jpg"></a></td>
    <td><a href="/name/nm0001/">Jane Doe</a></td>
  </tr>
  <tr class="even">
    <td class="primary_photo"><a href="/name/nm0002/?ref_=ttfc_fc_cl_i2"><img alt="John Roe"></a></td>
    <td><a href="/name/nm0002/">John Roe</a></td>
  </tr>
</table>
</body></html>"#;

pub const CREDITS_PAGE_DUPLICATE_ACTOR: &str = r#"<table class="cast_list">
  <tr><td class="primary_photo"><a href="/name/nm0001/">a</a></td></tr>
  <tr><td class="primary_photo"><a>missing href</a></td></tr>
  <tr><td class="primary_photo"><a href="/name/nm0001/">b</a></td></tr>
</table>"#;

pub const ACTOR_PAGE: &str = r#"<html><body>
<h1 class="header"> <span class="itemprop">Jane Doe</span></h1>
<div id="filmography">
  <div class="head">Actress (3 credits)</div>
  <div class="filmo-category-section">
    <div class="filmo-row odd" id="actress-tt1"><span class="year_column">2001</span>
      <b><a href="/title/tt1/">Film A</a></b><br/>Herself</div>
    <div class="filmo-row even" id="actress-tt2"><span class="year_column">1999</span>
      <b><a href="/title/tt2/">Film B</a></b> (TV Series)<br/><a href="/title/tt2/episodes">Episode</a></div>
    <div class="filmo-row odd" id="actress-tt1b"><b><a href="/title/tt1/">Film A</a></b></div>
  </div>
  <div class="head">Director (1 credit)</div>
  <div class="filmo-category-section">
    <div class="filmo-row odd" id="director-tt3"><b><a href="/title/tt3/">Film C</a></b></div>
  </div>
</div>
</body></html>"#;

pub const ACTOR_PAGE_NO_FILMOGRAPHY: &str = r#"<html><body>
<h1 class="header"><span class="itemprop">John Roe</span></h1>
<div id="filmography"></div>
</body></html>"#;

pub const ACTOR_PAGE_NO_NAME: &str = r#"<html><body>
<div class="filmo-row"><b><a href="/title/tt9/">Untitled Project</a></b></div>
</body></html>"#;

/// Parses a fixture as if it had been served from `url`
pub fn page(url: &str, body: &str) -> Page {
    Page::parse(Url::parse(url).unwrap(), body)
}
