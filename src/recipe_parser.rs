use serde::{Deserialize, Serialize};

pub const UNTITLED_RECIPE: &str = "Untitled Recipe";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Name,
    PrepTime,
    Ingredients,
    Steps,
}

// English tags come from the prompt template, Polish ones from the endpoint's Polish template.
const SECTION_TAGS: &[(&str, Section)] = &[
    ("<recipe_name>", Section::Name),
    ("<nazwa_przepisu>", Section::Name),
    ("<prep_time>", Section::PrepTime),
    ("<czas_przygotowania>", Section::PrepTime),
    ("<ingredients_needed>", Section::Ingredients),
    ("<potrzebne_składniki>", Section::Ingredients),
    ("<step_by_step_preparation>", Section::Steps),
    ("<przygotowanie_krok_po_kroku>", Section::Steps),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSections {
    pub name: String,
    pub prep_time: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

fn split_section_tag(line: &str) -> Option<(Section, &str)> {
    let trimmed = line.trim_start();
    SECTION_TAGS
        .iter()
        .find_map(|(tag, section)| trimmed.strip_prefix(tag).map(|rest| (*section, rest)))
}

fn strip_heading(line: &str) -> &str {
    let line = line.trim();
    line.strip_prefix("###").unwrap_or(line).trim()
}

pub fn extract_recipe_name(recipe_text: &str) -> String {
    for line in recipe_text.lines() {
        let candidate = match split_section_tag(line) {
            Some((Section::Name, rest)) => strip_heading(rest),
            Some(_) => break,
            None => strip_heading(line),
        };
        if !candidate.is_empty() {
            return candidate.to_string();
        }
    }
    UNTITLED_RECIPE.to_string()
}

fn strip_bullet(line: &str) -> &str {
    line.strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .or_else(|| line.strip_prefix("• "))
        .unwrap_or(line)
        .trim()
}

fn strip_step_number(line: &str) -> &str {
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return strip_bullet(line);
    }
    let rest = &line[digits..];
    rest.strip_prefix('.')
        .or_else(|| rest.strip_prefix(')'))
        .map(str::trim)
        .unwrap_or(line)
}

pub fn parse_recipe_sections(recipe_text: &str) -> RecipeSections {
    let mut sections = RecipeSections::default();
    let mut prep_time_lines: Vec<&str> = Vec::new();
    let mut current: Option<Section> = None;

    for raw_line in recipe_text.lines() {
        let line = match split_section_tag(raw_line) {
            Some((section, rest)) => {
                current = Some(section);
                rest.trim()
            }
            None => raw_line.trim(),
        };
        if line.is_empty() {
            continue;
        }

        match current {
            Some(Section::Name) if sections.name.is_empty() => {
                sections.name = strip_heading(line).to_string();
            }
            Some(Section::PrepTime) => prep_time_lines.push(line),
            Some(Section::Ingredients) => sections.ingredients.push(strip_bullet(line).to_string()),
            Some(Section::Steps) => sections.steps.push(strip_step_number(line).to_string()),
            _ => {}
        }
    }

    sections.prep_time = prep_time_lines.join(" ");
    if sections.name.is_empty() {
        sections.name = extract_recipe_name(recipe_text);
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    const TAGGED: &str = "
<recipe_name>
Goulash

<prep_time>
Preparation time: 90 minutes

<ingredients_needed>
- 500 g beef
* 2 onions
- 1 tbsp paprika

<step_by_step_preparation>
1. Brown the beef.
2) Add onions and paprika.
Simmer for an hour.
";

    #[test]
    fn name_is_total() {
        assert_eq!(extract_recipe_name(""), UNTITLED_RECIPE);
        assert_eq!(extract_recipe_name("   "), UNTITLED_RECIPE);
        assert_eq!(extract_recipe_name("\n\n  \n"), UNTITLED_RECIPE);
        assert_eq!(extract_recipe_name("<recipe_name>"), UNTITLED_RECIPE);
    }

    #[test]
    fn name_follows_tag_on_next_line() {
        assert_eq!(extract_recipe_name("<recipe_name>\nGoulash\n..."), "Goulash");
        assert_eq!(extract_recipe_name(TAGGED), "Goulash");
    }

    #[test]
    fn name_on_same_line_and_heading_marker() {
        assert_eq!(extract_recipe_name("<recipe_name> Pierogi ruskie\n..."), "Pierogi ruskie");
        assert_eq!(extract_recipe_name("### Tomato Soup\nstuff"), "Tomato Soup");
        assert_eq!(extract_recipe_name("<recipe_name>### Bigos"), "Bigos");
        assert_eq!(extract_recipe_name("<nazwa_przepisu>\nBigos"), "Bigos");
        assert_eq!(extract_recipe_name("  Plain first line  \nsecond"), "Plain first line");
    }

    #[test]
    fn empty_name_section_does_not_borrow_other_sections() {
        assert_eq!(extract_recipe_name("<recipe_name>\n\n<prep_time>\n15 minutes"), UNTITLED_RECIPE);
    }

    #[test]
    fn sections_are_split() {
        let sections = parse_recipe_sections(TAGGED);
        assert_eq!(sections.name, "Goulash");
        assert_eq!(sections.prep_time, "Preparation time: 90 minutes");
        assert_eq!(sections.ingredients, vec!["500 g beef", "2 onions", "1 tbsp paprika"]);
        assert_eq!(
            sections.steps,
            vec!["Brown the beef.", "Add onions and paprika.", "Simmer for an hour."]
        );
    }

    #[test]
    fn polish_tags_are_understood() {
        let text = "<nazwa_przepisu>\nBigos\n<czas_przygotowania>\n2 godziny\n<potrzebne_składniki>\n- kapusta\n<przygotowanie_krok_po_kroku>\n1. Gotuj.";
        let sections = parse_recipe_sections(text);
        assert_eq!(sections.name, "Bigos");
        assert_eq!(sections.prep_time, "2 godziny");
        assert_eq!(sections.ingredients, vec!["kapusta"]);
        assert_eq!(sections.steps, vec!["Gotuj."]);
    }

    #[test]
    fn untagged_text_only_yields_a_name() {
        let sections = parse_recipe_sections("Pancakes\nMix and fry.");
        assert_eq!(sections.name, "Pancakes");
        assert!(sections.ingredients.is_empty());
        assert!(sections.steps.is_empty());
    }
}
