// Copyright 2022 Zinc Labs Inc. and Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{http::StatusCode, response::Json};
use flot_timeseries::{params::DEFINITIONS, Row};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub rows: Vec<Row>,
    /// key — parameter name; value — parameter value as written in a query
    #[serde(default)]
    pub params: FxHashMap<String, String>,
}

pub async fn render(Json(req): Json<RenderRequest>) -> (StatusCode, Json<Value>) {
    match flot_cmd::render(req.rows, req.params) {
        Ok(rendered) => match &rendered.error {
            None => (
                StatusCode::OK,
                Json(json!({ "status": "success", "data": rendered })),
            ),
            Some(error) => (
                StatusCode::OK,
                Json(json!({ "status": "error", "error": error, "data": rendered })),
            ),
        },
        Err(error) => {
            tracing::error!(?error, "failed to render chart");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error", "error": format!("{error:#}") })),
            )
        }
    }
}

pub async fn params() -> Json<Value> {
    Json(json!({ "status": "success", "data": DEFINITIONS }))
}
