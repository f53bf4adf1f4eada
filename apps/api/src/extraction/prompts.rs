// Prompt template for the AI extraction path.

pub const RESUME_EXTRACT_SYSTEM: &str = "\
You are a precise resume data extractor. \
Extract structured portfolio data from resume text. \
You MUST respond with a single valid JSON object only, with no markdown fences and no explanations. \
Never invent details that are not present in the resume.";

pub const RESUME_EXTRACT_PROMPT: &str = r#"Extract the following resume into a single JSON object.

RESUME TEXT:
{resume_text}

OUTPUT SCHEMA (return exactly this structure):
{
  "name": "string",
  "email": "string",
  "phone": "string",
  "location": "string",
  "bio": "string (2-3 sentence professional summary)",
  "role": "string (current or most recent job title)",
  "skills": ["string"],
  "experience": [
    {
      "company": "string",
      "position": "string",
      "startDate": "string (e.g. Jan 2020 or 2020)",
      "endDate": "string (e.g. Dec 2022, 2022 or Present)",
      "description": "string",
      "highlights": ["string"]
    }
  ],
  "education": [
    {"school": "string", "degree": "string", "field": "string", "startDate": "string", "endDate": "string"}
  ],
  "projects": [
    {"name": "string", "description": "string", "technologies": ["string"], "url": "string", "github": "string"}
  ],
  "certifications": [
    {"name": "string", "issuer": "string", "date": "string"}
  ],
  "links": {"github": "string", "linkedin": "string", "twitter": "string", "website": "string", "portfolio": "string"}
}

RULES:
1. Use an empty string or empty array when a value is not present in the resume.
2. Keep experience and education in the order they appear.
3. Use "Present" as endDate for current positions.
4. Return ONLY the JSON object."#;
