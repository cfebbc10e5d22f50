//! OpenAPI description served at `/swagger.json`

use serde_json::{json, Value};

use crate::constants::{MAX_EMAIL_LEN, MAX_USERNAME_LEN};

/// Builds the OpenAPI 3 document describing the HTTP API
pub fn api_document() -> Value {
    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "User API",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "security": [{"Bearer": []}],
        "paths": {
            "/login": login_path(),
            "/users/": users_path(),
            "/users/{id}": user_path(),
        },
        "components": components(),
    })
}

fn schema_ref(name: &str) -> Value {
    json!({"$ref": format!("#/components/schemas/{}", name)})
}

fn json_content(schema: Value) -> Value {
    json!({"application/json": {"schema": schema}})
}

fn error_response() -> Value {
    json!({"$ref": "#/components/responses/Error"})
}

fn login_path() -> Value {
    let body = json!({
        "application/json": {"schema": schema_ref("Login")},
        "application/x-www-form-urlencoded": {"schema": schema_ref("Login")}
    });

    json!({
        "post": {
            "summary": "Issue an access token",
            "description": "Any non-empty username/password pair is accepted.",
            "security": [],
            "requestBody": {"required": true, "content": body},
            "responses": {
                "200": {"description": "Access token", "content": json_content(schema_ref("Token"))},
                "400": error_response()
            }
        }
    })
}

fn users_path() -> Value {
    let user_list = json!({"type": "array", "items": schema_ref("User")});

    json!({
        "get": {
            "summary": "List users",
            "operationId": "list_users",
            "responses": {
                "200": {"description": "Every stored user", "content": json_content(user_list)},
                "401": error_response()
            }
        },
        "post": {
            "summary": "Create a user",
            "operationId": "create_user",
            "requestBody": {"required": true, "content": json_content(schema_ref("User"))},
            "responses": {
                "201": {"description": "Created user", "content": json_content(schema_ref("User"))},
                "400": error_response(),
                "401": error_response(),
                "409": error_response()
            }
        }
    })
}

fn user_path() -> Value {
    json!({
        "parameters": [{
            "name": "id",
            "in": "path",
            "required": true,
            "schema": {"type": "integer", "format": "int64"}
        }],
        "get": {
            "summary": "Fetch a user",
            "responses": {
                "200": {"description": "The user", "content": json_content(schema_ref("User"))},
                "401": error_response(),
                "404": error_response()
            }
        },
        "delete": {
            "summary": "Delete a user",
            "responses": {
                "204": {"description": "User deleted"},
                "401": error_response(),
                "404": error_response()
            }
        }
    })
}

fn components() -> Value {
    let schemas = json!({
        "User": {
            "type": "object",
            "required": ["username", "email"],
            "properties": {
                "id": {"type": "integer", "readOnly": true},
                "username": {"type": "string", "maxLength": MAX_USERNAME_LEN},
                "email": {"type": "string", "maxLength": MAX_EMAIL_LEN}
            }
        },
        "Login": {
            "type": "object",
            "required": ["username", "password"],
            "properties": {
                "username": {"type": "string"},
                "password": {"type": "string"}
            }
        },
        "Token": {
            "type": "object",
            "properties": {"access_token": {"type": "string"}}
        },
        "Error": {
            "type": "object",
            "properties": {
                "code": {"type": "integer"},
                "message": {"type": "string"}
            }
        }
    });

    json!({
        "securitySchemes": {
            "Bearer": {"type": "http", "scheme": "bearer", "bearerFormat": "JWT"}
        },
        "schemas": schemas,
        "responses": {
            "Error": {"description": "Error", "content": json_content(schema_ref("Error"))}
        }
    })
}
