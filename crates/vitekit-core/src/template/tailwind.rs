use super::GeneratedFile;

pub const CONFIG_FILE_NAME: &str = "tailwind.config.js";
pub const STYLESHEET_PATH: &str = "src/index.css";

/// `tailwind.config.js` の固定内容。
pub const CONFIG_CONTENTS: &str = r#"/** @type {import('tailwindcss').Config} */
export default {
  content: [
    "./index.html",
    "./src/**/*.{js,ts,jsx,tsx}",
  ],
  theme: {
    extend: {},
  },
  plugins: [],
}
"#;

/// スタイルシートのエントリポイント。
pub const STYLESHEET_CONTENTS: &str = "@import \"tailwindcss\";\n";

/// Tailwind 有効時に書き込むファイル。プロジェクト名や他の機能には依存しない。
pub fn files() -> [GeneratedFile; 2] {
    [
        GeneratedFile::new(CONFIG_FILE_NAME, CONFIG_CONTENTS),
        GeneratedFile::new(STYLESHEET_PATH, STYLESHEET_CONTENTS),
    ]
}
