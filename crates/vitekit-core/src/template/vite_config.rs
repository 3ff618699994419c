use super::GeneratedFile;

/// 生成先のファイル名。
pub const FILE_NAME: &str = "vite.config.ts";

pub const DEV_SERVER_PORT: u16 = 3000;
pub const OUT_DIR: &str = "dist";
pub const VENDOR_CHUNK: &str = "vendor";

/// エイリアス名と `src` 配下のディレクトリ。
pub const PATH_ALIASES: &[(&str, &str)] = &[
    ("@", "./src"),
    ("@components", "./src/components"),
    ("@hooks", "./src/hooks"),
    ("@pages", "./src/pages"),
    ("@utils", "./src/utils"),
];

pub const TAILWIND_IMPORT: &str = "import tailwindcss from '@tailwindcss/vite'";
pub const TAILWIND_PLUGIN: &str = "tailwindcss(),";

/// `vite.config.ts` の内容を生成する。前後の空白は除去済み。
pub fn render(tailwind: bool) -> String {
    let tailwind_import = if tailwind {
        format!("\n{TAILWIND_IMPORT}")
    } else {
        String::new()
    };
    let tailwind_plugin = if tailwind {
        format!("\n    {TAILWIND_PLUGIN}")
    } else {
        String::new()
    };
    let aliases: String = PATH_ALIASES
        .iter()
        .map(|(alias, dir)| format!("      '{alias}': path.resolve(__dirname, '{dir}'),\n"))
        .collect();

    let contents = format!(
        r#"
import {{ defineConfig }} from 'vite'
import react from '@vitejs/plugin-react'
import path from 'path'{tailwind_import}

// https://vite.dev/config/
export default defineConfig({{
  plugins: [
    react(),{tailwind_plugin}
  ],
  resolve: {{
    alias: {{
{aliases}    }},
  }},
  server: {{
    port: {DEV_SERVER_PORT},
    open: true,
    strictPort: true,
  }},
  build: {{
    outDir: '{OUT_DIR}',
    sourcemap: true,
    rollupOptions: {{
      output: {{
        manualChunks(id) {{
          if (id.includes('node_modules')) {{
            return '{VENDOR_CHUNK}'
          }}
        }},
      }},
    }},
  }},
}})
"#
    );
    contents.trim().to_string()
}

pub fn file(tailwind: bool) -> GeneratedFile {
    GeneratedFile::new(FILE_NAME, render(tailwind))
}
