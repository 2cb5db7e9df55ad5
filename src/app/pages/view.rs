//! 页面模板与渲染
//!
//! 固定模板加少量命名占位值，没有任何业务逻辑依赖渲染结果。

/// 首页模板，占位符由 [`render_home`] 填充
const HOME_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Axum Docker App</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; background: #f5f5f5; }
        .container { max-width: 800px; margin: 0 auto; background: white; padding: 30px; border-radius: 10px; box-shadow: 0 0 10px rgba(0,0,0,0.1); }
        h1 { color: #333; text-align: center; }
        .status { background: #d4edda; color: #155724; padding: 15px; border-radius: 5px; margin: 20px 0; }
        .api-list { background: #f8f9fa; padding: 20px; border-radius: 5px; margin: 20px 0; }
        .endpoint { margin: 10px 0; padding: 10px; background: white; border-left: 4px solid #007bff; }
        .method { color: #007bff; font-weight: bold; }
        a { color: #007bff; text-decoration: none; }
        a:hover { text-decoration: underline; }
        .footer { text-align: center; margin-top: 30px; color: #666; font-size: 14px; }
    </style>
</head>
<body>
    <div class="container">
        <h1>🐳 Axum Docker App</h1>

        <div class="status">
            <strong>✅ Application Status:</strong> Running successfully in Docker!<br>
            <strong>🕐 Server Time:</strong> {{ current_time }}<br>
            <strong>🔄 Version:</strong> {{ version }}<br>
            <strong>🌍 Environment:</strong> {{ environment }}
        </div>

        <div class="api-list">
            <h3>📋 Available API Endpoints:</h3>

            <div class="endpoint">
                <span class="method">GET</span> <a href="/health">/health</a> - Health check endpoint
            </div>

            <div class="endpoint">
                <span class="method">GET</span> <a href="/api/users">/api/users</a> - Get all users
            </div>

            <div class="endpoint">
                <span class="method">GET</span> <a href="/api/users/1">/api/users/&lt;id&gt;</a> - Get user by ID
            </div>

            <div class="endpoint">
                <span class="method">POST</span> /api/users - Create new user (JSON required)
            </div>

            <div class="endpoint">
                <span class="method">GET</span> <a href="/api/stats">/api/stats</a> - Application statistics
            </div>

            <div class="endpoint">
                <span class="method">GET</span> <a href="/test">/test</a> - Test page with forms
            </div>
        </div>

        <div class="footer">
            <p>🚀 Auto-deployment enabled - Push to GitHub to update automatically!</p>
            <p>Built with Rust + Axum + Docker</p>
        </div>
    </div>
</body>
</html>
"#;

/// 测试页模板，纯静态，表单通过 fetch 调用 POST /api/users
pub const TEST_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Test Page - Axum Docker App</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; background: #f5f5f5; }
        .container { max-width: 600px; margin: 0 auto; background: white; padding: 30px; border-radius: 10px; box-shadow: 0 0 10px rgba(0,0,0,0.1); }
        h1 { color: #333; text-align: center; }
        .form-group { margin: 20px 0; }
        label { display: block; margin-bottom: 5px; font-weight: bold; }
        input, textarea { width: 100%; padding: 10px; border: 1px solid #ddd; border-radius: 5px; box-sizing: border-box; }
        button { background: #007bff; color: white; padding: 12px 20px; border: none; border-radius: 5px; cursor: pointer; font-size: 16px; }
        button:hover { background: #0056b3; }
        .result { margin: 20px 0; padding: 15px; background: #f8f9fa; border-radius: 5px; }
        a { color: #007bff; text-decoration: none; }
    </style>
</head>
<body>
    <div class="container">
        <h1>🧪 Test Page</h1>

        <form id="userForm">
            <div class="form-group">
                <label for="name">Name:</label>
                <input type="text" id="name" name="name" required>
            </div>

            <div class="form-group">
                <label for="email">Email:</label>
                <input type="email" id="email" name="email" required>
            </div>

            <div class="form-group">
                <label for="role">Role:</label>
                <input type="text" id="role" name="role" value="user">
            </div>

            <button type="submit">Create User</button>
        </form>

        <div id="result" class="result" style="display: none;"></div>

        <p><a href="/">← Back to Home</a></p>
    </div>

    <script>
        document.getElementById('userForm').addEventListener('submit', async function(e) {
            e.preventDefault();

            const formData = new FormData(this);
            const userData = {
                name: formData.get('name'),
                email: formData.get('email'),
                role: formData.get('role')
            };

            try {
                const response = await fetch('/api/users', {
                    method: 'POST',
                    headers: {
                        'Content-Type': 'application/json',
                    },
                    body: JSON.stringify(userData)
                });

                const result = await response.json();
                const resultDiv = document.getElementById('result');

                if (response.ok) {
                    resultDiv.innerHTML = `<strong>✅ Success!</strong><br>User created: ${JSON.stringify(result, null, 2)}`;
                    resultDiv.style.backgroundColor = '#d4edda';
                    resultDiv.style.color = '#155724';
                } else {
                    resultDiv.innerHTML = `<strong>❌ Error!</strong><br>${result.error || 'Unknown error'}`;
                    resultDiv.style.backgroundColor = '#f8d7da';
                    resultDiv.style.color = '#721c24';
                }

                resultDiv.style.display = 'block';
                this.reset();
            } catch (error) {
                const resultDiv = document.getElementById('result');
                resultDiv.innerHTML = `<strong>❌ Network Error!</strong><br>${error.message}`;
                resultDiv.style.backgroundColor = '#f8d7da';
                resultDiv.style.color = '#721c24';
                resultDiv.style.display = 'block';
            }
        });
    </script>
</body>
</html>
"#;

/// 渲染首页：填入当前时间、版本号和运行环境
pub fn render_home(current_time: &str, version: &str, environment: &str) -> String {
    HOME_TEMPLATE
        .replace("{{ current_time }}", current_time)
        .replace("{{ version }}", version)
        .replace("{{ environment }}", environment)
}
